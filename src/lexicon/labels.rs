//! Curated identifier → label table for the electric-power filers.
//!
//! Lower-case single-word keys at the top double as direct hits for headers
//! that were already split into words upstream.

use phf::{Map, phf_map};

/// Direct label map. Always consulted before any rule or tokenization.
pub static LABELS: Map<&'static str, &'static str> = phf_map! {
    "return" => "リターン",
    "revaluation" => "評価替え",
    "revenue" => "収益",
    "reversal" => "戻入",
    "rights" => "権利",
    "sga" => "販管費",
    "ssifrs" => "国際会計基準",
    "salaries" => "給与",
    "salary" => "給与",
    "sale" => "売却",
    "sales" => "売上",
    "scope" => "範囲",
    "second" => "第2位",
    "securities" => "有価証券",
    "shareholders" => "株主",
    "shareholding" => "持株",
    "shareholdingratio" => "持株比率",
    "shareholdingratiotreasuryshares" => "自己株式比率",
    "shareholdingratios" => "持株比率",
    "shareholdersequity" => "株主資本",
    "short" => "短",
    "solution" => "解決",
    "special" => "特別",
    "spent" => "使用済",
    "stocks" => "株式",
    "subtotal" => "小計",
    "supplies" => "貯蔵品",
    "thermal" => "火力",
    "total" => "合計",
    "totalnumber" => "総数",
    "totalshareholderreturn" => "株主総還元",
    "transfer" => "振替",
    "transformation" => "変電",
    "transmission" => "送電",
    "treasury" => "自己株式",
    "valuationandtranslation" => "評価換算",
    "valuationdifference" => "評価差額",
    "work" => "仕掛",
    "working" => "営業",
    "write" => "評価減",
    "writedowns" => "評価減",
    "dscr" => "DSCR",
    "fiscal_year" => "会計年度",
    "date" => "決算日",
    "company_code" => "EDINETコード",
    "ElectricUtilityOperatingExpensesELE" => "電気事業営業費用",
    "OtherBusinessOperatingExpensesELE" => "その他事業営業費用",

    // Non-operating income and expenses
    "NonOperatingIncome" => "営業外収益",
    "DividendsIncomeNOI" => "受取配当金",
    "InterestIncomeNOI" => "受取利息",
    "EquityInEarningsOfAffiliatesNOI" => "持分法投資利益",
    "ForeignExchangeGainsNOI" => "為替差益",
    "OtherNOI" => "その他営業外収益",
    "NonOperatingExpenses" => "営業外費用",
    "InterestExpensesNOE" => "支払利息",
    "ForeignExchangeLossesNOE" => "為替差損",
    "OtherNOE" => "その他営業外費用",
    "EquityInLossesOfAffiliatesNOE" => "持分法投資損失",

    // Ordinary income
    "OrdinaryRevenueELE" => "経常収益",
    "OrdinaryExpensesELE" => "経常費用",
    "OrdinaryIncome" => "経常利益",

    // Extraordinary income and losses
    "ExtraordinaryIncome" => "特別利益",
    "GrantsInAidFromNuclearDamageCompensationFacilitationCorporationEIELE" => "原子力損害賠償支援機構交付金",
    "GainOnSalesOfNoncurrentAssetsEI" => "固定資産売却益",
    "GainOnRevisionOfRetirementBenefitPlanEI" => "退職給付制度改定益",
    "GainOnChangeInEquityEI" => "持分変動利益",
    "GainOnReversalOfProvisionForLossOnDisasterEI" => "災害損失引当金戻入益",
    "SettlementReceivedEI" => "和解金収入",
    "GainOnSalesOfSecuritiesEI" => "有価証券売却益",
    "GainOnSalesOfSubsidiariesAndAffiliatesStocksEI" => "関係会社株式売却益",
    "ExtraordinaryLoss" => "特別損失",
    "CompensationForNuclearPowerRelatedDamagesELELE" => "原子力損害賠償費",
    "LossRelatedToInterimStorageProjectOfSpentFuelEL" => "使用済燃料中間貯蔵事業損失",
    "ImpairmentLossEL" => "減損損失",
    "ExtraordinaryLossOnDisasterEL" => "災害損失",
    "LossOnValuationOfSecuritiesEL" => "有価証券評価損",
    "ContingentLossELELE" => "偶発損失",
    "LossOnDecommissioningOfTEPCOFukushimaDainiNuclearPowerStationEL" => "福島第二原発廃炉損失",
    "LossOnReturnOfImbalanceIncomeAndExpenditureELELE" => "インバランス収支返還損失",

    // Income taxes
    "IncomeBeforeIncomeTaxes" => "税引前当期純利益",
    "IncomeTaxesCurrent" => "法人税等",
    "IncomeTaxesDeferred" => "法人税等調整額",
    "IncomeTaxes" => "法人税等合計",

    // Net income
    "ProfitLoss" => "当期純利益",
    "ProfitLossAttributableToNonControllingInterests" => "非支配株主帰属当期純利益",
    "ProfitLossAttributableToOwnersOfParent" => "親会社株主帰属当期純利益",
    "NetIncomeLossSummaryOfBusinessResults" => "当期純利益",

    // Other comprehensive income
    "ValuationDifferenceOnAvailableForSaleSecuritiesNetOfTaxOCI" => "その他有価証券評価差額金",
    "DeferredGainsOrLossesOnHedgesNetOfTaxOCI" => "繰延ヘッジ損益",
    "ForeignCurrencyTranslationAdjustmentNetOfTaxOCI" => "為替換算調整勘定",
    "RemeasurementsOfDefinedBenefitPlansNetOfTaxOCI" => "退職給付に係る調整額",
    "ShareOfOtherComprehensiveIncomeOfAssociatesAccountedForUsingEquityMethodOCI" => "持分法適用会社に対する持分相当額",
    "OtherComprehensiveIncome" => "その他包括利益合計",
    "ComprehensiveIncome" => "包括利益",
    "ComprehensiveIncomeAttributableToOwnersOfTheParent" => "親会社株主帰属包括利益",
    "ComprehensiveIncomeAttributableToNonControllingInterests" => "非支配株主帰属包括利益",

    // Balance sheet
    "TotalAssets" => "総資産",
    "TotalAssetsSummaryOfBusinessResults" => "総資産",
    "Equity" => "自己資本",
    "NetAssetsSummaryOfBusinessResults" => "純資産",
    "NetAssets" => "純資産合計",
    "EquityToAssetRatioSummaryOfBusinessResults" => "自己資本比率",
    "InterestBearingDebt" => "有利子負債",
    "CashAndDeposits" => "現金及び預金",
    "CashAndCashEquivalentsSummaryOfBusinessResults" => "現金及び現金同等物",
    "BondsPayable" => "社債",
    "LongTermLoansPayable" => "長期借入金",
    "ShortTermLoansPayable" => "短期借入金",
    "NotesAndAccountsReceivableTrade" => "受取手形及び売掛金",
    "Inventories" => "棚卸資産",
    "NoncurrentAssets" => "固定資産",
    "CurrentAssets" => "流動資産",
    "CurrentLiabilities" => "流動負債",
    "NoncurrentLiabilities" => "固定負債",
    "Liabilities" => "負債合計",
    "RetainedEarnings" => "利益剰余金",
    "CapitalStockSummaryOfBusinessResults" => "資本金",
    "InvestmentsInEntitiesAccountedForUsingEquityMethod" => "持分法適用会社投資",

    // Cash flow statement
    "NetCashProvidedByUsedInOperatingActivitiesSummaryOfBusinessResults" => "営業活動CF",
    "NetCashProvidedByUsedInInvestingActivitiesSummaryOfBusinessResults" => "投資活動CF",
    "NetCashProvidedByUsedInFinancingActivitiesSummaryOfBusinessResults" => "財務活動CF",
    "NetCashProvidedByUsedInOperatingActivities" => "営業活動によるCF",
    "NetCashProvidedByUsedInInvestingActivities" => "投資活動によるCF",
    "NetCashProvidedByUsedInFinancingActivities" => "財務活動によるCF",
    "NetIncreaseDecreaseInCashAndCashEquivalents" => "現金及び現金同等物純増減額",
    "EffectOfExchangeRateChangeOnCashAndCashEquivalents" => "現金及び現金同等物に係る換算差額",

    // Operating CF adjustments
    "DepreciationAndAmortizationOpeCF" => "減価償却費",
    "Depreciation" => "減価償却費",
    "ImpairmentLoss" => "減損損失",
    "ImpairmentLossOpeCF" => "減損損失",
    "LossRelatedToInterimStorageProjectOfSpentFuelOpeCF" => "使用済燃料中間貯蔵事業損失",
    "DecommissioningCostsOfNuclearPowerUnitsOpeCFELE" => "原子力発電施設解体費",
    "LossOnRetirementOfNoncurrentAssetsOpeCF" => "固定資産除却損",
    "IncreaseDecreaseInProvisionForReprocessingOfIrradiatedNuclearFuelOpeCFELE" => "使用済燃料再処理等引当金の増減",
    "IncreaseDecreaseInProvisionForOtherReprocessingOfIrradiatedNuclearFuelOpeCFELE" => "その他使用済燃料再処理等引当金の増減",
    "IncreaseDecreaseInProvisionForLossOnDisasterOpeCF" => "災害損失引当金の増減",
    "IncreaseDecreaseInNetDefinedBenefitLiabilityOpeCF" => "退職給付引当金の増減",
    "IncreaseDecreaseInNetDefinedBenefitAssetOpeCF" => "退職給付資産の増減",
    "InterestAndDividendsIncomeOpeCF" => "受取利息及び受取配当金",
    "InterestExpensesOpeCF" => "支払利息",
    "EquityInEarningsLossesOfAffiliatesOpeCF" => "持分法投資損益",
    "CompensationForNuclearPowerRelatedDamagesOpeCFELE" => "原子力損害賠償費",
    "GainOnSalesOfNoncurrentAssetsOpeCF" => "固定資産売却益",
    "GainOnSalesOfNonCurrentAssetsOpeCF" => "固定資産売却益",
    "LossGainOnChangeInEquityOpeCF" => "持分変動損益",
    "GainOnReversalOfProvisionForLossOnDisasterOpeCF" => "災害損失引当金戻入益",
    "LossOnDecommissioningOfTEPCOFukushimaDainiNuclearPowerStationOpeCF" => "福島第二原発廃炉損失",
    "GainOnSalesOfSubsidiariesAndAffiliatesStocksOpeCF" => "関係会社株式売却益",
    "LossOnReturnOfImbalanceIncomeAndExpenditureOpeCFELE" => "インバランス収支返還損失",
    "DecreaseIncreaseInNotesAndAccountsReceivableTradeOpeCF" => "売上債権の増減",
    "IncreaseDecreaseInNotesAndAccountsPayableTradeOpeCF" => "仕入債務の増減",
    "IncreaseDecreaseInAccruedExpensesOpeCF" => "未払費用の増減",
    "OtherNetOpeCF" => "その他",
    "SubtotalOpeCF" => "小計",
    "InterestAndDividendsIncomeReceivedOpeCFInvCF" => "利息及び配当金の受取額",
    "InterestExpensesPaidOpeCFFinCF" => "利息の支払額",
    "IncomeTaxesPaidOpeCF" => "法人税等の支払額",
    "IncomeTaxesRefundOpeCF" => "法人税等の還付額",
    "IncomeTaxesPaidRefundOpeCF" => "法人税等の支払額又は還付額",

    // Investing CF
    "PurchaseOfNoncurrentAssetsInvCF" => "固定資産の取得による支出",
    "ProceedsFromSalesOfNoncurrentAssetsInvCF" => "固定資産の売却による収入",
    "ProceedsFromContributionReceivedForConstructionInvCF" => "工事負担金等受入による収入",
    "PaymentsOfInvestmentAndLoansReceivableInvCF" => "投資有価証券の取得による支出",
    "CollectionOfInvestmentAndLoansReceivableInvCF" => "投資有価証券の売却による収入",
    "PaymentsIntoTimeDepositsInvCF" => "定期預金の預入による支出",
    "ProceedsFromWithdrawalOfTimeDepositsInvCF" => "定期預金の払戻による収入",
    "PurchaseOfInvestmentsInSubsidiariesResultingInChangeInScopeOfConsolidationInvCF" => "連結範囲変更を伴う子会社株式取得",
    "OtherNetInvCF" => "その他",
    "NetCashProvidedByUsedInInvestmentActivities" => "投資活動によるCF",

    // Financing CF
    "ProceedsFromIssuanceOfBondsFinCF" => "社債の発行による収入",
    "RedemptionOfBondsFinCF" => "社債の償還による支出",
    "ProceedsFromLongTermLoansPayableFinCF" => "長期借入金の借入による収入",
    "RepaymentOfLongTermLoansPayableFinCF" => "長期借入金の返済による支出",
    "IncreaseInShortTermLoansPayableFinCF" => "短期借入金の純増加額",
    "DecreaseInShortTermLoansPayableFinCF" => "短期借入金の純減少額",
    "ProceedsFromIssuanceOfCommercialPapersFinCF" => "コマーシャルペーパーの発行による収入",
    "RedemptionOfCommercialPapersFinCF" => "コマーシャルペーパーの償還による支出",
    "ProceedsFromShareIssuanceToNonControllingShareholdersFinCF" => "非支配株主への新株発行による収入",
    "OtherNetFinCF" => "その他",

    // SG&A and segment information
    "SalariesAndAllowancesSGA" => "給料及び手当",
    "EmployeesRetirementBenefitExpensesSGAELE" => "退職給付費用",
    "BusinessConsignmentExpensesSGA" => "業務委託費",
    "VariousExpensesSGA" => "雑費",
    "BadDebtsExpensesSGA" => "貸倒引当金繰入額",
    "ResearchAndDevelopmentExpensesIncludedInGeneralAndAdministrativeExpensesAndManufacturingCostForCurrentPeriod" => "研究開発費",
    "ResearchAndDevelopmentExpensesResearchAndDevelopmentActivities" => "研究開発費",
    "CapitalExpendituresOverviewOfCapitalExpendituresEtc" => "設備投資額",
    "RevenuesFromExternalCustomers" => "外部顧客への売上高",
    "TransactionsWithOtherSegments" => "セグメント間の内部売上高",
    "NetSales" => "売上高",
    "DepreciationSegmentInformation" => "減価償却費",
    "IncreaseInPropertyPlantAndEquipmentAndIntangibleAssets" => "有形固定資産及び無形固定資産増加額",

    // Electric utility operating revenue
    "ResidentialORElectricELE" => "電灯",
    "CommercialAndIndustrialORElectricELE" => "電力",
    "SoldPowerToOtherUtilitiesORElectricELE" => "他社販売電力料",
    "SoldPowerToOtherSuppliersORElectricELE" => "他社小売電気事業者販売電力料",
    "TransmissionRevenueORElectricELE" => "託送収益",
    "SettlementRevenueAmongUtilitiesORElectricELE" => "電力会社間精算収益",
    "GrantUnderActOnPurchaseOfRenewableEnergySourcedElectricityORElectricELE" => "再生可能エネルギー発電促進賦課金",
    "OtherElectricityRevenueORElectricELE" => "その他電気料",
    "RevenueFromLoanedFacilitiesORElectricELE" => "貸付設備収益",
    "RevenueEquivalentToContributionForNuclearDamageCompensationORElectricELE" => "原子力損害賠償相当収益",
    "RevenueEquivalentToContributionForFacilitatingNuclearReactorDecommissioningORElectricELE" => "原子力廃炉促進相当収益",
    "RevenueFromContractsToRecoverBackEndCostsRelatedToPastYearsPowerGenerationORElectricELE" => "過年度発電バックエンド費用回収契約収益",
    "ContributionReceivedForNuclearReactorDecommissionORElectricELE" => "原子力廃炉負担金",

    // Incidental business revenue
    "IncidentalBusinessOperatingRevenueELE" => "付帯事業営業収益",
    "OperatingRevenueEnergyFacilitiesServiceBusinessORIncidentalELE" => "エネルギー設備サービス事業",
    "OperatingRevenueRealEstateRentBusinessORIncidentalELE" => "不動産賃貸事業",
    "OperatingRevenueGasSupplyBusinessORIncidentalELE" => "ガス供給事業",
    "OperatingRevenueConsultingBusinessORIncidentalELE" => "コンサルティング事業",
    "OperatingRevenueSharedOfficeBusinessOEIncidentalELE" => "シェアオフィス事業",
    "OperatingRevenueOtherBusinessesORIncidentalELE" => "その他事業",

    // Electric utility operating expenses
    "HydroelectricPowerProductionExpensesELE" => "水力発電費",
    "ThermalPowerProductionExpensesOEElectricELE" => "火力発電費",
    "NuclearPowerProductionExpensesELE" => "原子力発電費",
    "InternalCombustionEnginePowerProductionExpensesOEElectricELE" => "内燃力発電費",
    "RenewablePowerProductionExpensesOEElectricELE" => "新エネルギー等発電費",
    "PurchasedPowerFromOtherUtilitiesOEElectricELE" => "他社購入電力料",
    "PurchasedPowerFromOtherSuppliersOEElectricELE" => "他社小売電気事業者購入電力料",
    "TransmissionExpensesOEElectricELE" => "送電費",
    "TransformationExpensesOEElectricELE" => "変電費",
    "DistributionExpensesOEElectricELE" => "配電費",
    "SellingExpensesOEElectricELE" => "販売費",
    "CostOfLoanedFacilitiesOEElectricELE" => "貸付設備費",
    "GeneralAndAdministrativeExpensesOEElectricELE" => "一般管理費",
    "LevyUnderActOnPurchaseOfRenewableEnergySourcedElectricityOEElectricELE" => "再生可能エネルギー発電促進賦課金",
    "ElectricPowerDevelopmentPromotionTaxOEElectricELE" => "電源開発促進税",
    "EnterpriseTaxOEElectricELE" => "事業税",
    "TransferredCostOfElectricityForConstructionAndIncidentalBusinessOEElectricELE" => "工事・付帯事業振替額",
    "AmortizationOfSuspenseAccountRelatedToNuclearPowerDecommissioningOEElectricELE" => "原子力廃炉関連仮勘定償却額",
    "ExpensesForThirdPartysPowerTransmissionServiceOEElectricELE" => "第三者送電サービス費",

    // Incidental business expenses
    "IncidentalBusinessOperatingExpensesELE" => "付帯事業営業費用",
    "OperatingExpensesEnergyFacilitiesServiceBusinessOEIncidentalELE" => "エネルギー設備サービス事業費",
    "OperatingExpensesRealEstateRentBusinessOEIncidentalELE" => "不動産賃貸事業費",
    "OperatingExpensesGasSupplyBusinessOEElectricELE" => "ガス供給事業費",
    "OperatingExpensesConsultingBusinessOEIncidentalELE" => "コンサルティング事業費",
    "OperatingExpensesSharedOfficeBusinessOEIncidentalELE" => "シェアオフィス事業費",
    "OperatingExpensesOtherBusinessesOEIncidentalELE" => "その他事業費",

    // Other non-operating items
    "FinancialRevenueNORELE" => "財務収益",
    "NonOperatingRevenueNORELE" => "営業外収益",
    "GainOnSalesOfNoncurrentAssetsNOIELE" => "固定資産売却益",
    "MiscellaneousRevenueNORELE" => "雑収益",
    "DividendIncome" => "受取配当金",
    "EquityInEarningsLossesOfAffiliates" => "持分法投資損益",
    "FinancialExpensesNOEELE" => "財務費用",
    "StockIssuanceCostNOE" => "株式交付費",
    "BondIssuanceCostNOE" => "社債発行費",
    "NonOperatingExpensesNOEELE" => "営業外費用",
    "LossOnSalesOfNoncurrentAssetsNOEELE" => "固定資産売却損",
    "MiscellaneousExpensesNOEELE" => "雑損失",

    // Provisions and reserves
    "ProvisionOrReversalOfReserveForPreparationOfTheDepreciationOfNuclearPowerConstructionELE" => "原子力発電施設解体引当金繰入又は戻入",
    "ProvisionOfReserveForPreparationOfTheDepreciationOfNuclearPowerConstructionELE" => "原子力発電施設解体引当金繰入",
    "ReversalOfReserveForPreparationOfTheDepreciationOfNuclearPowerConstructionELE" => "原子力発電施設解体引当金戻入",
    "ProvisionOfReserveForOverseasInvestmentLoss" => "海外投資等損失引当金繰入",
    "ReversalOfReserveForOverseasInvestmentLoss" => "海外投資等損失引当金戻入",
    "ProvisionOfReserveForSpecialDisasterELE" => "渇水準備引当金繰入",
    "ProvisionOrReversalOfReserveForFluctuationInWaterLevelsELE" => "渇水準備引当金繰入又は戻入",
    "ProvisionOfReserveForFluctuationInWaterLevelsELE" => "渇水準備引当金繰入",
    "ReversalOfReserveForFluctuationInWaterLevelsELE" => "渇水準備引当金戻入",
    "DecreaseIncreaseInReserveFundForReprocessingOfIrradiatedNuclearFuelOpeCFELE" => "使用済燃料再処理等積立金の増減",
    "IncreaseDecreaseInReserveFundForNuclearReactorDecommissioningOpeCFELE" => "原子力廃炉積立金の増減",
    "DecreaseIncreaseInReserveFundForNuclearReactorDecommissioningOpeCFELE" => "原子力廃炉積立金の増減",
    "IncreaseDecreaseInProvisionForPreparationOfRemovalOfReactorCoresInSpecifiedNuclearPowerFacilitiesOpeCFELE" => "特定原子力発電施設炉心等除去準備引当金の増減",

    // Nuclear and disaster related
    "PaymentsForExtraordinaryLossOnTheTohokuChihouTaiheiyouOkiEarthquakeOpeCF" => "東日本大震災特別損失の支払額",
    "GrantsInAidFromNuclearDamageLiabilityAndNuclearReactorDecommissionFacilitationFundOpeCF" => "原子力損害賠償・廃炉等支援機構交付金",
    "GrantsInAidFromNuclearDamageLiabilityAndNuclearReactorDecommissionFacilitationFundReceivedOpeCF" => "原子力損害賠償・廃炉等支援機構交付金の受取額",
    "GrantsInAidFromNuclearDamageCompensationFacilitationCorporationReceivedOpeCF" => "原子力損害賠償支援機構交付金の受取額",
    "CompensationForNuclearPowerRelatedDamagesPaidOpeCFELE" => "原子力損害賠償費の支払額",
    "LossOnDecommissioningOfTEPCOFukushimaDainiNuclearPowerStationSegmentInformation" => "福島第二原発廃炉損失",

    // Changes in equity
    "PurchaseOfTreasuryStock" => "自己株式の取得",
    "DisposalOfTreasuryStock" => "自己株式の処分",
    "ReversalOfRevaluationReserveForLand" => "土地再評価差額金の取崩",
    "Other" => "その他",
    "TotalChangesOfItemsDuringThePeriod" => "当期変動額合計",
    "NetChangesOfItemsOtherThanShareholdersEquity" => "株主資本以外の項目の当期変動額",
    "ChangeInTreasurySharesOfParentArisingFromTransactionsWithNonControllingShareholders" => "非支配株主との取引に係る親会社の持分変動",
    "ChangeOfScopeOfEquityMethod" => "持分法適用範囲の変動",
    "DecreaseByCorporateDivisionsplitoffType" => "会社分割による減少",
    "DecreaseInCashAndCashEquivalentsDueToChangeInScopeOfConsolidation" => "連結範囲変更に伴う現金及び現金同等物の減少額",
    "IncreaseDecreaseInCashAndCashEquivalentsResultingFromChangeOfScopeOfConsolidationCCE" => "連結範囲変更に伴う現金及び現金同等物の増減額",

    // Audit fees and officer remuneration
    "AuditFeesReportingCompany" => "監査報酬（提出会社）",
    "NonAuditFeesReportingCompany" => "非監査業務報酬（提出会社）",
    "AuditFeesConsolidatedSubsidiaries" => "監査報酬（連結子会社）",
    "NonAuditFeesConsolidatedSubsidiaries" => "非監査業務報酬（連結子会社）",
    "NonAuditFeesReportingCompanyNetworkFirms" => "非監査業務報酬（提出会社・ネットワーク）",
    "AuditFeesConsolidatedSubsidiariesNetworkFirms" => "監査報酬（連結子会社・ネットワーク）",
    "NonAuditFeesConsolidatedSubsidiariesNetworkFirms" => "非監査業務報酬（連結子会社・ネットワーク）",
    "AuditFeesTotal" => "監査報酬合計",
    "NonAuditFeesTotal" => "非監査業務報酬合計",
    "AuditFeesTotalNetworkFirms" => "監査報酬合計（ネットワーク）",
    "NonAuditFeesTotalNetworkFirms" => "非監査業務報酬合計（ネットワーク）",
    "TotalAmountOfRemunerationEtcRemunerationEtcByCategoryOfDirectorsAndOtherOfficers" => "報酬等総額",
    "FixedRemunerationRemunerationEtcByCategoryOfDirectorsAndOtherOfficers" => "固定報酬",
    "FixedRemunerationRemunerationByCategoryOfDirectorsAndOtherOfficers" => "固定報酬",
    "BaseRemunerationRemunerationEtcByCategoryOfDirectorsAndOtherOfficers" => "基本報酬",
    "PerformanceBasedRemunerationRemunerationEtcByCategoryOfDirectorsAndOtherOfficers" => "業績連動報酬",
    "PerformanceBasedRemunerationRemunerationByCategoryOfDirectorsAndOtherOfficers" => "業績連動報酬",
    "NumberOfDirectorsAndOtherOfficersRemunerationEtcByCategoryOfDirectorsAndOtherOfficers" => "役員人数",

    // Shares held for purposes other than pure investment
    "NumberOfIssuesWhoseNumberOfSharesIncreasedSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentReportingCompany" => "取得銘柄数（提出会社）",
    "TotalAcquisitionCostForIncreasedSharesSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentReportingCompany" => "取得額合計（提出会社）",
    "NumberOfIssuesWhoseNumberOfSharesDecreasedSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentReportingCompany" => "売却銘柄数（提出会社）",
    "TotalSaleAmountForDecreasedSharesSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentReportingCompany" => "売却額合計（提出会社）",
    "NumberOfIssuesWhoseNumberOfSharesIncreasedSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentLargestHoldingCompany" => "取得銘柄数（最大保有会社）",
    "TotalAcquisitionCostForIncreasedSharesSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentLargestHoldingCompany" => "取得額合計（最大保有会社）",
    "TotalAcquisitionCostForIncreasedSharesEquitySecuritiesNotListedInvestmentEquitySecuritiesHeldForPurposesOtherThanPureInvestmentLargestHoldingCompany" => "取得額合計（最大保有会社）",
    "NumberOfIssuesWhoseNumberOfSharesDecreasedSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentSecondLargestHoldingCompany" => "売却銘柄数（第2位保有会社）",
    "TotalSaleAmountForDecreasedSharesSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentSecondLargestHoldingCompany" => "売却額合計（第2位保有会社）",
    "TotalSalesAmountForDecreasedSharesEquitySecuritiesNotListedInvestmentEquitySecuritiesHeldForPurposesOtherThanPureInvestmentReportingCompany" => "売却額合計（提出会社）",
    "TotalSalesAmountForDecreasedSharesEquitySecuritiesNotListedInvestmentEquitySecuritiesHeldForPurposesOtherThanPureInvestmentLargestHoldingCompany" => "売却額合計（最大保有会社）",
    "NumberOfIssuesWhoseNumberOfSharesIncreasedSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentSecondLargestHoldingCompany" => "取得銘柄数（第2位保有会社）",
    "TotalAcquisitionCostForIncreasedSharesSharesNotListedInvestmentSharesHeldForPurposesOtherThanPureInvestmentSecondLargestHoldingCompany" => "取得額合計（第2位保有会社）",
};
