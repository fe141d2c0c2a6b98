use std::collections::HashMap;
use std::sync::Arc;

use crate::error::InvalidListingLine;

/// Separator between the name of a clinic and an entry in a listing.
const LISTING_SEPARATOR: &str = ": ";

/// A clinic and the raw text of its opening hours.
///
/// Clinics are only identified by their name: two records with the same
/// name are indistinguishable once compiled.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Clinic {
    pub name: Arc<str>,
    pub opening_hours: Vec<String>,
}

impl Clinic {
    /// ```
    /// use clinic_hours::Clinic;
    ///
    /// let clinic = Clinic::new("Mayo Clinic", ["Mon-Fri 7am to 11pm"]);
    /// assert_eq!(&*clinic.name, "Mayo Clinic");
    /// assert_eq!(clinic.opening_hours, ["Mon-Fri 7am to 11pm"]);
    /// ```
    pub fn new(
        name: impl Into<Arc<str>>,
        opening_hours: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            opening_hours: opening_hours.into_iter().map(Into::into).collect(),
        }
    }

    /// Load clinics from a plain text listing where each line holds the
    /// name of a clinic and one of its opening hours entries. Blank lines
    /// and lines starting with `#` are ignored.
    ///
    /// Entries of a same clinic are grouped together, clinics are returned
    /// in order of first appearance. Entries are not parsed at this point.
    ///
    /// ```
    /// use clinic_hours::Clinic;
    ///
    /// let listing = "
    ///     ## A small listing
    ///     Mayo Clinic: Mon-Fri 7am to 11pm
    ///     Angios R Us: Mon-Fri 9am to 5pm
    ///     Mayo Clinic: Sat-Sun 9am to 10pm
    /// ";
    ///
    /// let clinics = Clinic::parse_listing(listing).unwrap();
    /// assert_eq!(clinics.len(), 2);
    /// assert_eq!(clinics[0].opening_hours, ["Mon-Fri 7am to 11pm", "Sat-Sun 9am to 10pm"]);
    /// assert_eq!(&*clinics[1].name, "Angios R Us");
    ///
    /// assert!(Clinic::parse_listing("Mayo Clinic Mon-Fri 7am to 11pm").is_err());
    /// ```
    pub fn parse_listing(listing: &str) -> Result<Vec<Self>, InvalidListingLine> {
        let mut clinics: Vec<Self> = Vec::new();
        let mut clinic_by_name: HashMap<&str, usize> = HashMap::new();

        for (idx, line) in listing.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, entry)) = line.split_once(LISTING_SEPARATOR) else {
                return Err(InvalidListingLine { line: idx + 1, content: line.to_string() });
            };

            let pos = *clinic_by_name.entry(name).or_insert_with(|| {
                clinics.push(Self::new(name, std::iter::empty::<String>()));
                clinics.len() - 1
            });

            clinics[pos].opening_hours.push(entry.to_string());
        }

        Ok(clinics)
    }
}
