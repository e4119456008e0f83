#[cfg(test)]
mod integration_tests {

    use crate::{
        Header, LabelCache, LabelTranslator, Lexicon, SharedCache, audit, header, label_items,
        testing::cache_contract::CountingCache, union_line_items,
    };
    use std::{sync::Arc, thread};

    #[test]
    fn second_call_is_served_from_cache() {
        let spy = Arc::new(CountingCache::default());
        let t = LabelTranslator::builder().cache(Arc::clone(&spy)).build();

        assert_eq!(t.translate("NumberOfEmployees"), "従業員数");
        assert_eq!((spy.gets(), spy.hits(), spy.inserts()), (1, 0, 1));

        assert_eq!(t.translate("NumberOfEmployees"), "従業員数");
        assert_eq!((spy.gets(), spy.hits(), spy.inserts()), (2, 1, 1));
    }

    #[test]
    fn curated_labels_never_touch_the_cache() {
        let spy = Arc::new(CountingCache::default());
        let t = LabelTranslator::builder().cache(Arc::clone(&spy)).build();
        for (key, label) in Lexicon::default().labels() {
            assert_eq!(t.translate(key), label);
        }
        assert_eq!(spy.gets(), 0);
        assert_eq!(spy.inserts(), 0);
    }

    #[test]
    fn blank_labels_are_cached_too() {
        let spy = Arc::new(CountingCache::default());
        let t = LabelTranslator::builder().cache(Arc::clone(&spy)).build();
        t.translate("FooBarBaz");
        t.translate("FooBarBaz");
        assert_eq!(spy.hits(), 1);
        assert_eq!(t.cached(), 1);
    }

    #[test]
    fn concurrent_translation_agrees() {
        let cache = SharedCache::new();
        let t = Arc::new(LabelTranslator::builder().cache(cache.clone()).build());
        let ids = [
            "NumberOfEmployees",
            "OpeCF",
            "LossOnSaleOfInvestmentSecurities",
            "FooBarBaz",
            "AverageAnnualSalary",
        ];

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let t = Arc::clone(&t);
                thread::spawn(move || {
                    ids.iter()
                        .map(|id| t.translate(id).into_owned())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for r in &results[1..] {
            assert_eq!(r, &results[0]);
        }
        assert_eq!(results[0], ["従業員数", "営業CF", "売却投資有価証券損失", "", "平均年間給与"]);
        assert_eq!(cache.len(), ids.len());
    }

    #[test]
    fn csv_header_to_labels() {
        let csv = "\u{FEFF}\"fiscal_year\",\"date\",\"company_code\",\"NetSales\",\"NumberOfEmployees\",\"FooBarBaz\"\r\n2023,2024-03-31,E04498,1,2,3\r\n";
        let header = Header::from_csv(csv).unwrap();
        let keys: Vec<_> = header.line_items().collect();
        assert_eq!(keys, ["NetSales", "NumberOfEmployees", "FooBarBaz"]);

        let t = LabelTranslator::new();
        let labels: Vec<_> = label_items(&t, &keys)
            .into_iter()
            .map(|item| item.label.into_owned())
            .collect();
        assert_eq!(labels, ["売上高", "従業員数", ""]);
    }

    #[test]
    fn audit_an_extraction_root() {
        let dir = tempfile::tempdir().unwrap();
        for (company, statement, body) in [
            ("TEPCO", "PL", "fiscal_year,NetSales,FooBarBaz\n2023,1,2\n"),
            ("CHUBU", "PL", "fiscal_year,NetSales,NumberOfEmployees\n2023,1,2\n"),
            ("JERA", "CF", "fiscal_year,Depreciation,DepreciationAndAmortizationOpeCF\n2023,1,2\n"),
        ] {
            let company_dir = dir.path().join(company);
            std::fs::create_dir_all(&company_dir).unwrap();
            std::fs::write(company_dir.join(format!("{statement}.csv")), body).unwrap();
        }

        let scan = header::scan_root(dir.path()).unwrap();
        assert_eq!(scan.sheets.len(), 3);
        assert_eq!(scan.missing.len(), 6);

        let keys = union_line_items(scan.headers());
        assert_eq!(
            keys,
            [
                "Depreciation",
                "DepreciationAndAmortizationOpeCF",
                "FooBarBaz",
                "NetSales",
                "NumberOfEmployees"
            ]
        );

        let report = audit(&LabelTranslator::new(), &keys);
        assert_eq!(report.total, 5);
        assert_eq!(report.blank, ["FooBarBaz"]);
        assert!(report.english.is_empty());
        assert_eq!(report.duplicate_labels.len(), 1);
        assert!(!report.is_clean());
    }
}
