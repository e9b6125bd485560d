//! Static catalogs: legal processes, their required documents, and the
//! keyword variants used to detect document types from raw text.
//!
//! This is configuration data, not runtime-derived state.

use serde::{Deserialize, Serialize};

/// A named legal process, mapped 1:1 to a required-document list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Process {
    #[serde(rename = "Company Incorporation")]
    CompanyIncorporation,
    #[serde(rename = "Employment & HR")]
    EmploymentHr,
    #[serde(rename = "Licensing")]
    Licensing,
    #[serde(rename = "Compliance & Risk")]
    ComplianceRisk,
    #[serde(rename = "Commercial Agreements")]
    CommercialAgreements,
}

impl Process {
    pub fn name(&self) -> &'static str {
        match self {
            Process::CompanyIncorporation => "Company Incorporation",
            Process::EmploymentHr => "Employment & HR",
            Process::Licensing => "Licensing",
            Process::ComplianceRisk => "Compliance & Risk",
            Process::CommercialAgreements => "Commercial Agreements",
        }
    }

    /// Required document-type labels for this process.
    pub fn required_documents(&self) -> &'static [&'static str] {
        match self {
            Process::CompanyIncorporation => &[
                "Articles of Association",
                "Memorandum of Association",
                "Board Resolution",
                "Shareholder Resolution",
                "Incorporation Application Form",
                "UBO Declaration Form",
                "Register of Members and Directors",
                "Change of Registered Address Notice",
            ],
            Process::EmploymentHr => &[
                "Standard Employment Contract",
                "Employee Handbook",
                "Offer Letter",
            ],
            Process::Licensing => &[
                "Licensing Application Form",
                "Supporting Documents for License",
            ],
            Process::ComplianceRisk => &[
                "Data Protection Policy",
                "Compliance Policy",
                "Risk Assessment",
            ],
            Process::CommercialAgreements => &[
                "NDA",
                "Consultancy Agreement",
                "Service Agreement",
                "Sale/Purchase Agreement",
            ],
        }
    }

    /// Labels whose presence indicates this process is being attempted.
    ///
    /// Incorporation uses a narrower indicator set than its full checklist;
    /// the other processes use their checklists directly.
    pub fn indicator_documents(&self) -> &'static [&'static str] {
        match self {
            Process::CompanyIncorporation => &[
                "Articles of Association",
                "Memorandum of Association",
                "Incorporation Application Form",
                "Register of Members and Directors",
            ],
            other => other.required_documents(),
        }
    }

    /// Detection priority order for process resolution.
    pub const DETECTION_ORDER: &'static [Process] = &[
        Process::CompanyIncorporation,
        Process::EmploymentHr,
        Process::Licensing,
        Process::ComplianceRisk,
        Process::CommercialAgreements,
    ];
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Document-type label -> lowercase keyword variants. A label matches when
/// any variant appears as a substring of the lowercased sample text.
pub const DOC_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Articles of Association",
        &["articles of association", "aoa", "article of association"],
    ),
    (
        "Memorandum of Association",
        &["memorandum of association", "moa", "memorandum"],
    ),
    ("Board Resolution", &["board resolution", "resolution of the board"]),
    (
        "Shareholder Resolution",
        &[
            "shareholder resolution",
            "resolution of the shareholders",
            "shareholders' resolution",
        ],
    ),
    (
        "Incorporation Application Form",
        &["incorporation application", "application for incorporation", "form ra"],
    ),
    (
        "UBO Declaration Form",
        &["ubo declaration", "ultimate beneficial owner", "ubo form"],
    ),
    (
        "Register of Members and Directors",
        &[
            "register of members",
            "register of directors",
            "register of members and directors",
        ],
    ),
    (
        "Change of Registered Address Notice",
        &["change of registered address", "registered address notice"],
    ),
    (
        "Standard Employment Contract",
        &["employment contract", "standard employment contract", "employee contract"],
    ),
    ("Offer Letter", &["offer letter", "employment offer"]),
    ("NDA", &["non-disclosure agreement", "nda", "confidentiality agreement"]),
    ("Consultancy Agreement", &["consultancy agreement", "consultant agreement"]),
    ("Service Agreement", &["service agreement", "services agreement"]),
    ("Data Protection Policy", &["data protection policy", "dpr", "data protection"]),
    ("Compliance Policy", &["compliance policy", "compliance manual"]),
    (
        "Licensing Application Form",
        &["licensing application", "license application", "application for license"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorporation_requires_eight_documents() {
        assert_eq!(Process::CompanyIncorporation.required_documents().len(), 8);
    }

    #[test]
    fn test_indicators_are_subset_of_required() {
        for process in Process::DETECTION_ORDER {
            for label in process.indicator_documents() {
                assert!(
                    process.required_documents().contains(label),
                    "{} indicator '{}' missing from checklist",
                    process,
                    label
                );
            }
        }
    }

    #[test]
    fn test_process_serde_names() {
        let json = serde_json::to_string(&Process::EmploymentHr).unwrap();
        assert_eq!(json, "\"Employment & HR\"");
    }

    #[test]
    fn test_every_keyword_variant_is_lowercase() {
        for (_, variants) in DOC_TYPE_KEYWORDS {
            for v in *variants {
                assert_eq!(*v, v.to_lowercase());
            }
        }
    }
}
