use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A link shown in the "ways to apply" or "other resources" lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub url: String,
    pub description: String,
}

impl ResourceLink {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionOptions {
    pub apply: Vec<ResourceLink>,
    pub other_resources: Vec<ResourceLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LinkCategory {
    Apply,
    OtherResources,
}

#[derive(Debug, Deserialize)]
struct OptionRow {
    jurisdiction: String,
    category: LinkCategory,
    url: String,
    description: String,
}

#[derive(Debug)]
pub enum JurisdictionError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidCode { line: usize, value: String },
}

impl std::fmt::Display for JurisdictionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JurisdictionError::Io(err) => write!(f, "failed to read jurisdiction options: {}", err),
            JurisdictionError::Csv(err) => write!(f, "invalid jurisdiction options CSV: {}", err),
            JurisdictionError::InvalidCode { line, value } => write!(
                f,
                "line {}: `{}` is not a two-letter jurisdiction code",
                line, value
            ),
        }
    }
}

impl std::error::Error for JurisdictionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JurisdictionError::Io(err) => Some(err),
            JurisdictionError::Csv(err) => Some(err),
            JurisdictionError::InvalidCode { .. } => None,
        }
    }
}

impl From<std::io::Error> for JurisdictionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for JurisdictionError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Application and food-assistance links keyed by upper-case jurisdiction code.
#[derive(Debug, Clone, Default)]
pub struct JurisdictionDirectory {
    entries: BTreeMap<String, JurisdictionOptions>,
}

impl JurisdictionDirectory {
    /// Built-in directory. North Carolina is the only deployed jurisdiction.
    pub fn standard() -> Self {
        let mut directory = Self::default();
        directory.insert(
            "NC",
            JurisdictionOptions {
                apply: vec![
                    ResourceLink::new(
                        "https://ncfast.nc.gov/Curam/logon.jsp",
                        "Apply online using NCFast.",
                    ),
                    ResourceLink::new(
                        "https://www.ncdhhs.gov/media/2368/open",
                        "Apply in person at your county's Department of Social Services.",
                    ),
                ],
                other_resources: vec![ResourceLink::new("https://nc211.org/", "Search via NC211")],
            },
        );
        directory
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, JurisdictionError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `jurisdiction,category,url,description` rows. Rows keep their
    /// file order within each list.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, JurisdictionError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut directory = Self::default();

        for (index, record) in csv_reader.deserialize::<OptionRow>().enumerate() {
            let row = record?;
            let code = row.jurisdiction.to_ascii_uppercase();
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(JurisdictionError::InvalidCode {
                    line: index + 2,
                    value: row.jurisdiction,
                });
            }

            let options = directory.entries.entry(code).or_default();
            let link = ResourceLink::new(row.url, row.description);
            match row.category {
                LinkCategory::Apply => options.apply.push(link),
                LinkCategory::OtherResources => options.other_resources.push(link),
            }
        }

        Ok(directory)
    }

    pub fn insert(&mut self, code: &str, options: JurisdictionOptions) {
        self.entries.insert(code.to_ascii_uppercase(), options);
    }

    pub fn get(&self, code: &str) -> Option<&JurisdictionOptions> {
        self.entries.get(&code.to_ascii_uppercase())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
