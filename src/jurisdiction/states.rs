//! Indian states and union territories with their GST state codes

use serde::Serialize;

/// One state or union territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndianState {
    /// Two-digit GST state code, also the GSTIN prefix
    pub gst_code: &'static str,
    /// Common two-letter abbreviation
    pub abbreviation: &'static str,
    /// Lowercase name with spaces and punctuation removed
    pub normalized: &'static str,
    /// Name as printed on invoices
    pub display_name: &'static str,
}

impl IndianState {
    const fn new(
        gst_code: &'static str,
        abbreviation: &'static str,
        normalized: &'static str,
        display_name: &'static str,
    ) -> Self {
        Self {
            gst_code,
            abbreviation,
            normalized,
            display_name,
        }
    }

    /// Place-of-supply label, e.g. `Maharashtra (27)`
    pub fn place_of_supply(&self) -> String {
        format!("{} ({})", self.display_name, self.gst_code)
    }
}

pub static STATES: [IndianState; 37] = [
    IndianState::new("01", "JK", "jammuandkashmir", "Jammu and Kashmir"),
    IndianState::new("02", "HP", "himachalpradesh", "Himachal Pradesh"),
    IndianState::new("03", "PB", "punjab", "Punjab"),
    IndianState::new("04", "CH", "chandigarh", "Chandigarh"),
    IndianState::new("05", "UK", "uttarakhand", "Uttarakhand"),
    IndianState::new("06", "HR", "haryana", "Haryana"),
    IndianState::new("07", "DL", "delhi", "Delhi"),
    IndianState::new("08", "RJ", "rajasthan", "Rajasthan"),
    IndianState::new("09", "UP", "uttarpradesh", "Uttar Pradesh"),
    IndianState::new("10", "BR", "bihar", "Bihar"),
    IndianState::new("11", "SK", "sikkim", "Sikkim"),
    IndianState::new("12", "AR", "arunachalpradesh", "Arunachal Pradesh"),
    IndianState::new("13", "NL", "nagaland", "Nagaland"),
    IndianState::new("14", "MN", "manipur", "Manipur"),
    IndianState::new("15", "MZ", "mizoram", "Mizoram"),
    IndianState::new("16", "TR", "tripura", "Tripura"),
    IndianState::new("17", "ML", "meghalaya", "Meghalaya"),
    IndianState::new("18", "AS", "assam", "Assam"),
    IndianState::new("19", "WB", "westbengal", "West Bengal"),
    IndianState::new("20", "JH", "jharkhand", "Jharkhand"),
    IndianState::new("21", "OD", "odisha", "Odisha"),
    IndianState::new("22", "CG", "chhattisgarh", "Chhattisgarh"),
    IndianState::new("23", "MP", "madhyapradesh", "Madhya Pradesh"),
    IndianState::new("24", "GJ", "gujarat", "Gujarat"),
    IndianState::new(
        "26",
        "DN",
        "dadraandnagarhavelianddamananddiu",
        "Dadra and Nagar Haveli and Daman and Diu",
    ),
    IndianState::new("27", "MH", "maharashtra", "Maharashtra"),
    IndianState::new("29", "KA", "karnataka", "Karnataka"),
    IndianState::new("30", "GA", "goa", "Goa"),
    IndianState::new("31", "LD", "lakshadweep", "Lakshadweep"),
    IndianState::new("32", "KL", "kerala", "Kerala"),
    IndianState::new("33", "TN", "tamilnadu", "Tamil Nadu"),
    IndianState::new("34", "PY", "puducherry", "Puducherry"),
    IndianState::new("35", "AN", "andamanandnicobarislands", "Andaman and Nicobar Islands"),
    IndianState::new("36", "TS", "telangana", "Telangana"),
    IndianState::new("37", "AP", "andhrapradesh", "Andhra Pradesh"),
    IndianState::new("38", "LA", "ladakh", "Ladakh"),
    IndianState::new("97", "OT", "otherterritory", "Other Territory"),
];

/// Older spellings and alternate abbreviations, already lowercased
const ALIASES: [(&str, &str); 14] = [
    ("ut", "uttarakhand"),
    ("uttaranchal", "uttarakhand"),
    ("or", "odisha"),
    ("orissa", "odisha"),
    ("ct", "chhattisgarh"),
    ("tg", "telangana"),
    ("pondicherry", "puducherry"),
    ("newdelhi", "delhi"),
    ("nctofdelhi", "delhi"),
    ("dd", "dadraandnagarhavelianddamananddiu"),
    ("damananddiu", "dadraandnagarhavelianddamananddiu"),
    ("dadraandnagarhaveli", "dadraandnagarhavelianddamananddiu"),
    ("jammukashmir", "jammuandkashmir"),
    ("andamannicobar", "andamanandnicobarislands"),
];

/// Normalize a free-text state name for comparison.
///
/// Case and punctuation are ignored, and abbreviations and legacy names map
/// to the normalized full name (`"MH"` → `"maharashtra"`, `"U.P."` →
/// `"uttarpradesh"`). Unknown names come back cleaned but otherwise unchanged.
pub fn normalize_state_name(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if let Some(state) = STATES
        .iter()
        .find(|state| state.abbreviation.eq_ignore_ascii_case(&cleaned))
    {
        return state.normalized.to_string();
    }

    if let Some((_, normalized)) = ALIASES.iter().find(|(alias, _)| *alias == cleaned) {
        return normalized.to_string();
    }

    cleaned
}

/// Find a state by name, abbreviation or alias
pub fn lookup_state(input: &str) -> Option<&'static IndianState> {
    let normalized = normalize_state_name(input);
    STATES.iter().find(|state| state.normalized == normalized)
}

/// Find a state by its two-digit GST code
pub fn state_by_gst_code(code: &str) -> Option<&'static IndianState> {
    STATES.iter().find(|state| state.gst_code == code)
}
