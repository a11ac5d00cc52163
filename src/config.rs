use anyhow::Result;

pub const DEFAULT_OUTPUT_PATH: &str = "customers_for_quickbooks.csv";

pub const DEFAULT_CONTACT_FORM_SUBJECTS: [&str; 2] = [
    "[Business Name] Contacts Form - new submission",
    "[Your Website] Contact Form Submission",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mbox_path: Option<String>,
    pub output_path: String,
    pub contact_form_subjects: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mbox_path: None,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            contact_form_subjects: DEFAULT_CONTACT_FORM_SUBJECTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Configuration loaded from the process environment; non-blank CLI
    /// subjects replace CONTACT_FORM_SUBJECTS
    pub fn with_cli_subjects<S: AsRef<str>>(cli_subjects: &[S]) -> Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), cli_subjects)
    }

    /// Builds the configuration from any key lookup (environment, tests...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources::<F, &str>(lookup, &[])
    }

    fn from_sources<F, S>(lookup: F, cli_subjects: &[S]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        S: AsRef<str>,
    {
        let defaults = Config::default();

        let cli_subjects = clean_subjects(cli_subjects);
        let contact_form_subjects = if !cli_subjects.is_empty() {
            cli_subjects
        } else {
            match lookup("CONTACT_FORM_SUBJECTS") {
                Some(raw) => {
                    let subjects = parse_subject_list(&raw);
                    if subjects.is_empty() {
                        anyhow::bail!(
                            "CONTACT_FORM_SUBJECTS is set but contains no subject \
                             (use ';' to separate several subjects, or pass --contact-subject)"
                        );
                    }
                    subjects
                }
                None => defaults.contact_form_subjects,
            }
        };

        Ok(Config {
            mbox_path: lookup("MBOX_PATH").filter(|p| !p.trim().is_empty()),
            output_path: lookup("OUTPUT_CSV")
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.output_path),
            contact_form_subjects,
        })
    }
}

fn clean_subjects<S: AsRef<str>>(subjects: &[S]) -> Vec<String> {
    subjects
        .iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a `;`-separated subject list; blank entries would match every subject
pub fn parse_subject_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_path, "customers_for_quickbooks.csv");
        assert_eq!(config.contact_form_subjects.len(), 2);
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACT_FORM_SUBJECTS", "Wedding inquiry ; Booking request;"),
            ("MBOX_PATH", "/tmp/inbox.mbox"),
            ("OUTPUT_CSV", "out.csv"),
        ]))
        .unwrap();

        assert_eq!(config.contact_form_subjects, vec!["Wedding inquiry", "Booking request"]);
        assert_eq!(config.mbox_path.as_deref(), Some("/tmp/inbox.mbox"));
        assert_eq!(config.output_path, "out.csv");
    }

    #[test]
    fn test_blank_subject_list_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("CONTACT_FORM_SUBJECTS", " ; ;")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_subjects_override_blank_environment() {
        let lookup = lookup_from(&[("CONTACT_FORM_SUBJECTS", " ; ")]);
        let config = Config::from_sources(lookup, &["Booking request", " "]).unwrap();
        assert_eq!(config.contact_form_subjects, vec!["Booking request"]);

        let lookup = lookup_from(&[("CONTACT_FORM_SUBJECTS", " ; ")]);
        assert!(Config::from_sources(lookup, &["", "  "]).is_err());
    }
}
