use std::error::Error;

use xbrl_labels::{Company, Header, Statement, label_items, translate, union_line_items};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Header rows as the extractor writes them (BOM, quotes, CRLF)
    // ────────────────────────────────────────────────────────────────
    let sheets = [
        (
            Company::Tepco,
            "\u{FEFF}\"fiscal_year\",\"date\",\"company_code\",\"NetSales\",\"OperatingIncome\",\"NumberOfEmployees\"\r\n2023,2024-03-31,E04498,1,2,3\r\n",
        ),
        (
            Company::Chubu,
            "fiscal_year,date,company_code,NetSales,AverageAnnualSalary,NumberOfFemaleEmployees\n2023,2024-03-31,E04502,1,2,3\n",
        ),
        (
            Company::Jera,
            "fiscal_year,date,company_code,NetSales,RatioOfFemaleDirectorsAndOtherOfficers\n2023,2024-03-31,X99999,1,2\n",
        ),
    ];

    let headers = sheets
        .iter()
        .map(|(_, csv)| Header::from_csv_with_rows(csv))
        .collect::<Result<Vec<_>, _>>()?;

    // ────────────────────────────────────────────────────────────────
    // One row per line item, one column per company
    // ────────────────────────────────────────────────────────────────
    println!("{}", Statement::Pl.title());
    print!("{:<40}{:<24}", "key", "label");
    for (company, _) in &sheets {
        print!("{:<12}", company.display_name());
    }
    println!();

    let keys = union_line_items(&headers);
    for item in label_items(xbrl_labels::default_translator(), &keys) {
        print!("{:<40}{:<24}", item.key, item.label);
        for header in &headers {
            let present = header.line_items().any(|k| k == item.key);
            print!("{:<12}", if present { "○" } else { "-" });
        }
        println!();
    }

    // ────────────────────────────────────────────────────────────────
    // Metadata columns still have display labels
    // ────────────────────────────────────────────────────────────────
    for column in xbrl_labels::METADATA_COLUMNS {
        println!("{column} → {}", translate(column));
    }

    Ok(())
}
