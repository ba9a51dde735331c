/// Generated `version.h` for a release package.
use chrono::NaiveDate;

/// Package-relative location of the generated header.
pub const VERSION_HEADER_PATH: &str = "include/ogdf/internal/version.h";

/// Release version for `date`, formatted `YYYY.MM`.
pub fn version_string(date: NaiveDate) -> String {
    date.format("%Y.%m").to_string()
}

/// Full contents of the version header for `version`.
pub fn render_version_header(version: &str) -> String {
    format!(
        "#ifndef OGDF_VERSION_H\n\
         #define OGDF_VERSION_H\n\
         \n\
         #define OGDF_VERSION \"{version}\"\n\
         \n\
         #endif // OGDF_VERSION_H\n"
    )
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_zero_padded_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(version_string(date), "2024.03");

        let december = NaiveDate::from_ymd_opt(2012, 12, 31).unwrap();
        assert_eq!(version_string(december), "2012.12");
    }

    #[test]
    fn header_matches_expected_layout() {
        let expected = "#ifndef OGDF_VERSION_H\n\
                        #define OGDF_VERSION_H\n\
                        \n\
                        #define OGDF_VERSION \"2024.03\"\n\
                        \n\
                        #endif // OGDF_VERSION_H\n";
        assert_eq!(render_version_header("2024.03"), expected);
    }
}
