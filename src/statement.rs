//! The companies and statements of the comparison dashboard, and where their
//! extracted CSVs live on disk.
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    #[error("unknown company `{0}` (expected TEPCO, CHUBU or JERA)")]
    UnknownCompany(String),
    #[error("unknown statement `{0}` (expected PL, BS or CF)")]
    UnknownStatement(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Company {
    Tepco,
    Chubu,
    Jera,
}

impl Company {
    pub const ALL: [Company; 3] = [Company::Tepco, Company::Chubu, Company::Jera];

    /// Directory name under the extraction root.
    pub const fn code(self) -> &'static str {
        match self {
            Company::Tepco => "TEPCO",
            Company::Chubu => "CHUBU",
            Company::Jera => "JERA",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Company::Tepco => "東京電力HD",
            Company::Chubu => "中部電力",
            Company::Jera => "JERA",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Company {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Company::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatementError::UnknownCompany(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statement {
    Pl,
    Bs,
    Cf,
}

impl Statement {
    pub const ALL: [Statement; 3] = [Statement::Pl, Statement::Bs, Statement::Cf];

    /// File stem of the extracted CSV.
    pub const fn code(self) -> &'static str {
        match self {
            Statement::Pl => "PL",
            Statement::Bs => "BS",
            Statement::Cf => "CF",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Statement::Pl => "損益計算書",
            Statement::Bs => "貸借対照表",
            Statement::Cf => "キャッシュフロー計算書",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Statement {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statement::ALL
            .into_iter()
            .find(|st| st.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatementError::UnknownStatement(s.to_owned()))
    }
}

/// `root/{company}/{statement}.csv`
pub fn csv_path(root: impl AsRef<Path>, company: Company, statement: Statement) -> PathBuf {
    root.as_ref()
        .join(company.code())
        .join(format!("{}.csv", statement.code()))
}

/// Every (company, statement) pair in dashboard order.
pub fn all_sheets() -> impl Iterator<Item = (Company, Statement)> {
    Company::ALL
        .into_iter()
        .flat_map(|c| Statement::ALL.into_iter().map(move |s| (c, s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("tepco".parse::<Company>(), Ok(Company::Tepco));
        assert_eq!(" JERA ".parse::<Company>(), Ok(Company::Jera));
        assert_eq!("cf".parse::<Statement>(), Ok(Statement::Cf));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "KEPCO".parse::<Company>(),
            Err(StatementError::UnknownCompany("KEPCO".into()))
        );
        assert_eq!(
            "SS".parse::<Statement>(),
            Err(StatementError::UnknownStatement("SS".into()))
        );
    }

    #[test]
    fn csv_layout() {
        let path = csv_path("XBRL_output", Company::Chubu, Statement::Bs);
        assert_eq!(path, Path::new("XBRL_output/CHUBU/BS.csv"));
    }

    #[test]
    fn nine_sheets() {
        let sheets: Vec<_> = all_sheets().collect();
        assert_eq!(sheets.len(), 9);
        assert_eq!(sheets[0], (Company::Tepco, Statement::Pl));
        assert_eq!(sheets[8], (Company::Jera, Statement::Cf));
    }

    #[test]
    fn display_names() {
        assert_eq!(Company::Tepco.display_name(), "東京電力HD");
        assert_eq!(Statement::Cf.title(), "キャッシュフロー計算書");
        assert_eq!(Company::Chubu.to_string(), "CHUBU");
    }
}
