#[cfg(test)]
mod unit_tests {

    use crate::{LabelTranslator, Lexicon, NoCache, translate, tokenize};
    use std::borrow::Cow;

    #[test]
    fn fiscal_year_is_curated() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("fiscal_year"), "会計年度");
        assert_eq!(translate("fiscal_year"), "会計年度");
    }

    #[test]
    fn number_of_employees_uses_rule() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("NumberOfEmployees"), "従業員数");
    }

    #[test]
    fn increase_decrease_rule() {
        let t = LabelTranslator::new();
        // curated
        assert_eq!(
            t.translate("IncreaseDecreaseInNetDefinedBenefitLiabilityOpeCF"),
            "退職給付引当金の増減"
        );
        // derived
        assert_eq!(
            t.translate("IncreaseDecreaseInInventoriesOpeCF"),
            "棚卸資産営業CFの増減"
        );
    }

    #[test]
    fn unknown_identifier_is_blank() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("UnknownXyzTag123"), "");
        assert_eq!(t.translate("FooBarBaz"), "");
    }

    #[test]
    fn repeated_calls_agree() {
        let t = LabelTranslator::new();
        let first = t.translate("IncreaseDecreaseInInventoriesOpeCF").into_owned();
        let second = t.translate("IncreaseDecreaseInInventoriesOpeCF").into_owned();
        assert_eq!(first, second);
    }

    #[test]
    fn curated_label_beats_rule() {
        let t = LabelTranslator::new();
        let lexicon = Lexicon::default();
        let curated = lexicon
            .label("IncreaseDecreaseInNetDefinedBenefitLiabilityOpeCF")
            .unwrap();
        assert_ne!(
            t.derive("IncreaseDecreaseInNetDefinedBenefitLiabilityOpeCF"),
            curated
        );
        assert!(matches!(
            t.translate("IncreaseDecreaseInNetDefinedBenefitLiabilityOpeCF"),
            Cow::Borrowed(label) if label == curated
        ));
    }

    #[test]
    fn earlier_rule_wins() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("TotalNumberOfIssuedShares"), "発行済株式総数");
        assert_eq!(t.translate("ProvisionForBonuses"), "賞与引当金");
        assert_eq!(t.translate("ReserveFundForReprocessingOfIrradiatedNuclearFuel"), "再処理燃料積立金");
        assert_eq!(
            t.translate("DecreaseIncreaseInReserveFundForReprocessingOfIrradiatedNuclearFuel"),
            "再処理燃料の増減"
        );
    }

    #[test]
    fn rule_labels() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("LossOnSaleOfInvestmentSecurities"), "売却投資有価証券損失");
        assert_eq!(t.translate("GainOnSaleOfInvestmentSecurities"), "売却投資有価証券益");
        assert_eq!(t.translate("ChangeInAccountingPolicy"), "会計の変動");
        assert_eq!(t.translate("ChangeOfAccountingPolicy"), "会計の変更");
        assert_eq!(t.translate("TotalAmountOfDividends"), "配当総額");
        assert_eq!(t.translate("PercentageOfFemaleEmployees"), "女性従業員構成比");
        assert_eq!(t.translate("RatioOfFemaleDirectorsAndOtherOfficers"), "女性取締役その他役員比率");
        assert_eq!(
            t.translate("NetIncreaseDecreaseInShortTermLoansPayable"),
            "短期貸付金純増減"
        );
        assert_eq!(
            t.translate("CashFlowsFromUsedInOperatingActivities"),
            "営業活動によるキャッシュフロー"
        );
        assert_eq!(
            t.translate("CashAndCashEquivalentsEndOfPeriod"),
            "現金及び現金同等物期間"
        );
    }

    #[test]
    fn bare_prefix_is_not_a_rule_match() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("NumberOf"), "数");
        assert_eq!(t.translate("ProvisionOf"), "");
        assert_eq!(t.translate("CashAndCashEquivalents"), "現金現金同等物");
    }

    #[test]
    fn line_break_in_remainder_skips_rules() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("NumberOf\nEmployees"), "数従業員");
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate("NetSales"), "売上高");
        assert_eq!(t.translate("netsales"), "");
        assert_eq!(t.translate("  NetSales"), "純");
    }

    #[test]
    fn empty_identifier() {
        let t = LabelTranslator::new();
        assert_eq!(t.translate(""), "");
        assert_eq!(tokenize::split("").as_slice(), [""]);
    }

    #[test]
    fn no_cache_matches_cached() {
        let cached = LabelTranslator::new();
        let uncached = LabelTranslator::builder().cache(NoCache).build();
        for id in ["OpeCF", "AverageAnnualSalary", "LossOnSaleOfInvestmentSecurities", "HDCompany"] {
            assert_eq!(cached.translate(id), uncached.translate(id));
        }
        assert_eq!(uncached.cached(), 0);
    }
}
