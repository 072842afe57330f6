//! Resource library with stakeholder and country filtering
//!
//! Documents carry an audience label and a country restriction; what a
//! user sees is decided per document and then grouped by category for
//! the resources page.

use crate::core::models::{Document, DocumentCategory, User, UserRole, category_slug};

/// Whether a user may view a document
///
/// Country is checked first: the document must be unrestricted or match
/// the user's country (defaulting to "US"). Then the stakeholder label
/// decides: `All Employees` and `New Hires` are open to every role,
/// `Leaders` requires TEAM_MANAGER or above, anything else is denied.
pub fn can_view_document(user: &User, document: &Document) -> bool {
    if !document.is_global() && document.country.trim() != user.country_or_default() {
        return false;
    }

    match document.stakeholder.trim() {
        "All Employees" | "New Hires" => true,
        "Leaders" => matches!(
            user.role,
            UserRole::Owner | UserRole::Admin | UserRole::TeamManager
        ),
        _ => false,
    }
}

/// In-memory document catalog
pub struct ResourceLibrary {
    catalog: Vec<Document>,
}

impl ResourceLibrary {
    /// Create the library with the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: seed_catalog(),
        }
    }

    /// Create the library over a custom catalog
    pub fn with_catalog(catalog: Vec<Document>) -> Self {
        Self { catalog }
    }

    /// Number of documents in the catalog, before filtering
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The documents this user may view, grouped by category
    ///
    /// Categories and documents keep catalog order.
    pub async fn accessible_documents(&self, user: &User) -> Vec<DocumentCategory> {
        let mut categories: Vec<DocumentCategory> = Vec::new();

        for document in &self.catalog {
            if !can_view_document(user, document) {
                continue;
            }

            let id = category_slug(&document.category);
            match categories.iter_mut().find(|category| category.id == id) {
                Some(category) => {
                    category.documents.push(document.clone());
                    category.count += 1;
                }
                None => categories.push(DocumentCategory {
                    id,
                    name: document.category.clone(),
                    count: 1,
                    documents: vec![document.clone()],
                }),
            }
        }

        categories
    }
}

impl Default for ResourceLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn doc(name: &str, category: &str, stakeholder: &str, country: &str, link: &str) -> Document {
    Document {
        name: name.to_string(),
        category: category.to_string(),
        stakeholder: stakeholder.to_string(),
        country: country.to_string(),
        owner: Some("HR".to_string()),
        link: link.to_string(),
    }
}

/// Built-in document catalog
fn seed_catalog() -> Vec<Document> {
    vec![
        // Supervisor material, leaders only
        doc(
            "PIP Form",
            "Supervisor Tool Kit",
            "Leaders",
            "All Countries",
            "https://drive.example.com/supervisor/pip-form",
        ),
        doc(
            "CAF Form",
            "Supervisor Tool Kit",
            "Leaders",
            "All Countries",
            "https://drive.example.com/supervisor/caf-form",
        ),
        doc(
            "Coaching Log",
            "Supervisor Tool Kit",
            "Leaders",
            "All Countries",
            "https://drive.example.com/supervisor/coaching-log",
        ),
        doc(
            "Incident Report Form",
            "Supervisor Tool Kit",
            "Leaders",
            "All Countries",
            "https://drive.example.com/supervisor/incident-report",
        ),
        doc(
            "Performance Evaluation Form",
            "Supervisor Tool Kit",
            "Leaders",
            "All Countries",
            "https://drive.example.com/supervisor/performance-evaluation",
        ),
        // Reading material for everyone
        doc(
            "Employee Handbook",
            "Important Reading Manuals",
            "All Employees",
            "All Countries",
            "https://drive.example.com/manuals/employee-handbook",
        ),
        doc(
            "Leave Policy",
            "Important Reading Manuals",
            "All Employees",
            "All Countries",
            "https://drive.example.com/manuals/leave-policy",
        ),
        doc(
            "Acceptable Use Policy",
            "Important Reading Manuals",
            "All Employees",
            "All Countries",
            "https://drive.example.com/manuals/acceptable-use-policy",
        ),
        doc(
            "Code of Conduct",
            "Important Reading Manuals",
            "All Employees",
            "All Countries",
            "https://drive.example.com/manuals/code-of-conduct",
        ),
        // Country-specific tools
        doc(
            "Sprout Payroll Guide",
            "Important Tools",
            "All Employees",
            "PH",
            "https://drive.example.com/tools/sprout-guide",
        ),
        doc(
            "Aleluya Payroll Guide",
            "Important Tools",
            "All Employees",
            "CO",
            "https://drive.example.com/tools/aleluya-guide",
        ),
        doc(
            "Rippling Guide",
            "Important Tools",
            "All Employees",
            "US",
            "https://drive.example.com/tools/rippling-guide",
        ),
        doc(
            "QuickBooks Time Guide",
            "Time Keeping",
            "All Employees",
            "US",
            "https://drive.example.com/time/quickbooks-guide",
        ),
        doc(
            "TSheets Guide",
            "Time Keeping",
            "All Employees",
            "All countries",
            "https://drive.example.com/time/tsheets-guide",
        ),
        // Onboarding
        doc(
            "Onboarding Checklist",
            "Pre-employment Requirements",
            "New Hires",
            "All Countries",
            "https://drive.example.com/onboarding/checklist",
        ),
    ]
}
