//! Word-fragment dictionary used by the tokenizer fallback.
//!
//! Keys are lower-case ASCII. An empty value drops the fragment (articles,
//! prepositions, conjunctions).

use phf::{Map, phf_map};

/// Token dictionary, keyed by the lower-cased token.
pub static TOKENS: Map<&'static str, &'static str> = phf_map! {
    "accounting" => "会計",
    "activities" => "活動",
    "affiliated" => "関係",
    "all" => "全",
    "and" => "",
    "antimonopolyact" => "独占禁止法",
    "article" => "条",
    "assets" => "資産",
    "attributable" => "帰属する",
    "based" => "に基づく",
    "basic" => "基本",
    "bookvalue" => "帳簿価額",
    "business" => "事業",
    "by" => "",
    "calculated" => "計算された",
    "calculation" => "計算",
    "capital" => "資本",
    "carrying" => "帳簿",
    "cash" => "現金",
    "cf" => "CF",
    "cfifrs" => "IFRS CF",
    "cfele" => "電力CF",
    "charge" => "費用",
    "classified" => "分類された",
    "commercial" => "商業",
    "commission" => "委員会",
    "components" => "構成要素",
    "comprehensive" => "包括",
    "consolidation" => "連結",
    "constituting" => "構成する",
    "consumption" => "消費",
    "consignment" => "委託",
    "corporations" => "法人",
    "customers" => "顧客",
    "cumulative" => "累積",
    "dei" => "DEI",
    "derivative" => "デリバティブ",
    "derivatives" => "デリバティブ",
    "details" => "詳細",
    "due" => "期限到来",
    "effects" => "影響",
    "electric" => "電気",
    "energy" => "エネルギー",
    "enforcement" => "施行",
    "equivalents" => "同等物",
    "financial" => "財務",
    "flow" => "フロー",
    "foreigners" => "外国人",
    "for" => "",
    "from" => "",
    "grants" => "交付金",
    "groups" => "グループ",
    "held" => "保有",
    "highest" => "最高",
    "ifrs" => "IFRS",
    "imbalance" => "インバランス",
    "impairment" => "減損",
    "in" => "",
    "income" => "利益",
    "increase" => "増加",
    "interest" => "利息",
    "internal" => "内部",
    "international" => "国際",
    "issued" => "発行済",
    "issuance" => "発行",
    "item" => "項目",
    "largest" => "最大",
    "lease" => "リース",
    "legal" => "法的",
    "length" => "期間",
    "loaded" => "積載",
    "loss" => "損失",
    "lowest" => "最低",
    "method" => "方法",
    "names" => "名称",
    "noe" => "営業外費用",
    "national" => "国",
    "notlisted" => "非上場",
    "of" => "",
    "on" => "",
    "operating" => "営業",
    "options" => "オプション",
    "ordinance" => "条例",
    "other" => "その他",
    "ownership" => "所有",
    "package" => "パッケージ",
    "paper" => "紙",
    "papers" => "書類",
    "parent" => "親会社",
    "per" => "当たり",
    "payout" => "支払",
    "ppe" => "有形固定資産",
    "portion" => "部分",
    "preferred" => "優先",
    "price" => "価格",
    "provisions" => "引当金",
    "providers" => "提供者",
    "pure" => "純",
    "ratio" => "比率",
    "recognized" => "認識された",
    "related" => "関連",
    "relating" => "関連する",
    "resulting" => "結果として生じる",
    "results" => "結果",
    "retirement" => "退職",
    "return" => "リターン",
    "reversal" => "戻入",
    "rights" => "権利",
    "sale" => "売却",
    "scope" => "範囲",
    "secondlargest" => "第2位",
    "segregated" => "分離された",
    "service" => "サービス",
    "services" => "サービス",
    "sga" => "販管費",
    "share" => "株式",
    "shareholders" => "株主",
    "shareholdings" => "持株",
    "sold" => "売却された",
    "solution" => "解決策",
    "specified" => "特定",
    "standards" => "基準",
    "submission" => "提出",
    "summary" => "要約",
    "syndicate" => "シンジケート",
    "taking" => "取得",
    "than" => "",
    "the" => "",
    "those" => "",
    "to" => "",
    "transaction" => "取引",
    "transfer" => "振替",
    "unit" => "単位",
    "using" => "使用",
    "utility" => "公益事業",
    "utilities" => "公益事業",
    "voting" => "議決権",
    "waterlevels" => "水位",
    "whose" => "",
    "with" => "",
    "working" => "運転",
    "writedowns" => "評価減",
    "expenses" => "費用",
    "selling" => "販売",
    "general" => "一般",
    "administrative" => "管理",
    "research" => "研究",
    "development" => "開発",
    "salaries" => "給与",
    "salary" => "給与",
    "allowances" => "手当",
    "allowance" => "引当金",
    "interests" => "持分",
    "dividend" => "配当",
    "dividends" => "配当",
    "inventory" => "在庫",
    "inventories" => "棚卸資産",
    "merchandise" => "商品",
    "goods" => "製品",
    "finished" => "完成",
    "work" => "仕掛",
    "progress" => "進捗",
    "construction" => "建設",
    "advance" => "前払",
    "advances" => "前受",
    "prepaid" => "前払",
    "equipment" => "設備",
    "machinery" => "機械",
    "vehicles" => "車両",
    "buildings" => "建物",
    "structures" => "構築物",
    "land" => "土地",
    "intangible" => "無形",
    "investment" => "投資",
    "investments" => "投資",
    "securities" => "有価証券",
    "security" => "証券",
    "loans" => "貸付金",
    "loan" => "借入",
    "long" => "長",
    "short" => "短",
    "term" => "期",
    "payabletrade" => "買掛金",
    "receivabletrade" => "売掛金",
    "notes" => "手形",
    "deposits" => "預り金",
    "deposit" => "預り金",
    "borrowed" => "借入",
    "bond" => "社債",
    "bonds" => "社債",
    "employee" => "従業員",
    "employees" => "従業員",
    "female" => "女性",
    "male" => "男性",
    "directors" => "取締役",
    "officers" => "役員",
    "executive" => "執行",
    "number" => "数",
    "average" => "平均",
    "annual" => "年間",
    "monthly" => "月次",
    "years" => "年",
    "age" => "年齢",
    "percentage" => "割合",
    "change" => "変動",
    "changes" => "変動",
    "decreased" => "減少",
    "decrease" => "減少",
    "decreaseincrease" => "増減",
    "increasedecrease" => "増減",
    "total" => "合計",
    "totalnumber" => "総数",
    "totalsale" => "売却総額",
    "totalsales" => "売上合計",
    "totalsalesamount" => "売却額合計",
    "totalsalesamountfor" => "売却額合計",
    "totalsalesamountfordecreasedshares" => "売却額合計",
    "totalsalesamountforincreasedshares" => "取得額合計",
    "totalsaleamount" => "売却額合計",
    "totalamount" => "総額",
    "totalassets" => "総資産",
    "totalshareholderreturn" => "株主総還元",
    "valuationandtranslation" => "評価換算",
    "translationadjustments" => "換算調整",
    "valuationdifference" => "評価差額",
    "shareholdingratio" => "持株比率",
    "shareholdingratiotreasuryshares" => "自己株式比率",
    "treasuryshares" => "自己株式",
    "shareholdingratios" => "持株比率",
    "owner" => "株主",
    "owners" => "株主",
    "ownersequity" => "自己資本",
    "roe" => "ROE",
    "ope" => "営業",
    "inv" => "投資",
    "fin" => "財務",
    "ele" => "電力",
    "caele" => "流動資産（電力）",
    "clele" => "流動負債（電力）",
    "nclele" => "固定負債（電力）",
    "ioaele" => "投資その他資産（電力）",
    "cae" => "流動資産",
    "ca" => "流動資産",
    "cl" => "流動負債",
    "ncl" => "固定負債",
    "nca" => "固定資産",
    "ia" => "無形資産",
    "ioa" => "投資その他資産",
    "oes" => "営業費用",
    "oeelectric" => "電気事業費用",
    "oparating" => "営業費用",
    "cost" => "費用",
    "costs" => "費用",
    "raw" => "原料",
    "materials" => "材料",
    "supplies" => "貯蔵品",
    "repair" => "修繕",
    "maintenance" => "保守",
    "expenseelectric" => "電力費用",
    "incub" => "育成",
    "overseas" => "海外",
    "regional" => "地域",
    "incidental" => "付帯",
    "plant" => "設備",
    "plants" => "設備",
    "facility" => "設備",
    "facilities" => "設備",
    "transmission" => "送電",
    "distribution" => "配電",
    "transformation" => "変電",
    "hydroelectric" => "水力",
    "thermal" => "火力",
    "renewable" => "再生可能",
    "engine" => "内燃機",
    "combustion" => "燃焼",
    "nuclearpower" => "原子力",
    "reactor" => "炉",
    "decommissioning" => "廃炉",
    "removal" => "除去",
    "reprocessing" => "再処理",
    "spent" => "使用済",
    "fuel" => "燃料",
    "disaster" => "災害",
    "special" => "特別",
    "fluctuation" => "変動",
    "resource" => "資源",
    "overseasinvestment" => "海外投資",
    "guarantee" => "保証",
    "guarantees" => "保証",
    "directorsbonuses" => "役員賞与",
    "bonuses" => "賞与",
    "remuneration" => "報酬",
    "performance" => "業績",
    "linked" => "連動",
    "awards" => "付与",
    "stock" => "株式",
    "instrument" => "金融商品",
    "instruments" => "金融商品",
    "contribution" => "拠出",
    "payablefor" => "支払対象",
    "contract" => "契約",
    "contracts" => "契約",
    "liabilitiesand" => "負債と",
    "netassets" => "純資産",
    "cashflows" => "キャッシュフロー",
    "flows" => "フロー",
    "before" => "前",
    "after" => "後",
    "effect" => "影響",
    "effective" => "実効",
    "rate" => "率",
    "rates" => "率",
    "returnon" => "利回り",
    "index" => "指数",
    "shareprice" => "株価",
    "percent" => "割合",
    "amountof" => "金額",
    "ratioof" => "比率",
    "rateof" => "比率",
    "minority" => "少数",
    "non" => "非",
    "controlling" => "支配",
    "associates" => "関連会社",
    "subsidiaries" => "子会社",
    "subsidiary" => "子会社",
    "unconsolidated" => "非連結",
    "consolidated" => "連結",
    "changeof" => "変更",
    "changesin" => "変動",
    "increaseby" => "増加",
    "decreaseby" => "減少",
    "absorptions" => "吸収",
    "absorption" => "吸収",
    "merger" => "合併",
    "combination" => "結合",
    "employeescalculated" => "従業員",
    "childcare" => "育児",
    "caregiver" => "介護",
    "leave" => "休暇",
    "family" => "家族",
    "members" => "構成員",
    "metrics" => "指標",
    "information" => "情報",
    "about" => "",
    "reporting" => "提出会社",
    "company" => "会社",
    "companies" => "会社",
    "consolidatedsubsidiaries" => "連結子会社",
    "proposal" => "提案",
    "averageannualsalary" => "平均年間給与",
    "averageage" => "平均年齢",
    "averagelength" => "平均勤続年数",
    "averagenumber" => "平均人数",
    "temporary" => "臨時",
    "workers" => "労働者",
    "wages" => "賃金",
    "difference" => "差",
    "differences" => "差",
    "childcareleave" => "育児休業",
    "caregivers" => "介護者",
    "caregiversleave" => "介護休暇",
    "measurement" => "測定",
    "metricsof" => "指標",
    "pureinvestment" => "純投資",
    "purposes" => "目的",
    "holding" => "保有",
    "shares" => "株式",
    "issue" => "銘柄",
    "issues" => "銘柄",
    "increased" => "増加",
    "carryingamount" => "帳簿価額",
    "acquisition" => "取得",
    "salesamount" => "売却額",
    "proceeds" => "収入",
    "payments" => "支出",
    "purchase" => "取得",
    "purchases" => "取得",
    "collection" => "回収",
    "collected" => "回収",
    "effectsof" => "影響",
    "refund" => "還付",
    "refunds" => "還付",
    "prior" => "前",
    "period" => "期間",
    "periods" => "期間",
    "payableother" => "その他支払",
    "receivableother" => "その他受取",
    "loaned" => "貸付",
    "load" => "負荷",
    "allowancefor" => "引当金",
    "assetretirement" => "資産除去",
    "obligations" => "債務",
    "intangibleassets" => "無形資産",
    "property" => "資産",
    "kpi" => "KPI",
    "dscr" => "DSCR",
    "paid" => "支払済",
    "financing" => "財務活動",
    "payment" => "支払",
    "received" => "受取",
    "net" => "純",
    "gross" => "総",
    "extraordinary" => "特別",
    "debt" => "負債",
    "maturity" => "満期",
    "marketable" => "売買目的",
    "available" => "売却可能",
};
