// ── Country calling-code reference data ──

use cartera_api::models::{CountryCodeEntry, Translations};

fn entry(name: &str, es: &str, alpha3: &str, calling_code: &str) -> CountryCodeEntry {
    CountryCodeEntry {
        name: name.to_owned(),
        translations: Translations {
            es: Some(es.to_owned()),
        },
        flag: format!(
            "https://restcountries.eu/data/{}.svg",
            alpha3.to_lowercase()
        ),
        alpha3_code: alpha3.to_owned(),
        calling_codes: vec![calling_code.to_owned()],
    }
}

/// Static fallback used when the remote reference asset is empty or
/// unavailable.
pub fn fallback_country_codes() -> Vec<CountryCodeEntry> {
    vec![
        entry("Argentina", "Argentina", "ARG", "54"),
        entry("México", "México", "MEX", "52"),
        entry("Estado Unidos", "Estado Unidos", "USA", "1"),
    ]
}
