//! Technology categories and their tag lists.

use std::collections::BTreeMap;

/// A category of technology tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TechCategory {
    Finance,
    Development,
    Cloud,
    DataScience,
    Analytics,
    Security,
    Business,
    Engineering,
    Design,
}

impl TechCategory {
    /// All categories.
    pub const ALL: [TechCategory; 9] = [
        TechCategory::Finance,
        TechCategory::Development,
        TechCategory::Cloud,
        TechCategory::DataScience,
        TechCategory::Analytics,
        TechCategory::Security,
        TechCategory::Business,
        TechCategory::Engineering,
        TechCategory::Design,
    ];

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            TechCategory::Finance => "Finance",
            TechCategory::Development => "Development",
            TechCategory::Cloud => "Cloud",
            TechCategory::DataScience => "Data Science",
            TechCategory::Analytics => "Analytics",
            TechCategory::Security => "Security",
            TechCategory::Business => "Business",
            TechCategory::Engineering => "Engineering",
            TechCategory::Design => "Design",
        }
    }
}

impl std::fmt::Display for TechCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Built-in technology catalog.
pub(super) fn builtin() -> BTreeMap<TechCategory, Vec<String>> {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        TechCategory::Finance,
        tags(&[
            "SAP Finance",
            "Oracle Financials",
            "QuickBooks",
            "Excel Advanced",
            "Power BI",
            "Tableau",
            "NetSuite",
            "Sage",
            "Xero",
            "Bloomberg Terminal",
            "ADP Payroll",
            "Workday Financial",
        ]),
    );
    catalog.insert(
        TechCategory::Development,
        tags(&[
            "Python",
            "Java",
            "JavaScript",
            "C#",
            "Go",
            "React",
            "Angular",
            "Vue.js",
            "Node.js",
            "Django",
            "Flask",
            "Spring Boot",
            "Docker",
            "Kubernetes",
            "Git",
        ]),
    );
    catalog.insert(
        TechCategory::Cloud,
        tags(&[
            "AWS",
            "Azure",
            "Google Cloud",
            "Docker",
            "Kubernetes",
            "Terraform",
            "CloudFormation",
            "Lambda",
            "EC2",
            "S3",
            "RDS",
            "DynamoDB",
        ]),
    );
    catalog.insert(
        TechCategory::DataScience,
        tags(&[
            "Python",
            "R",
            "TensorFlow",
            "PyTorch",
            "Pandas",
            "NumPy",
            "Scikit-learn",
            "Jupyter",
            "SQL",
            "Hadoop",
            "Spark",
        ]),
    );
    catalog.insert(
        TechCategory::Analytics,
        tags(&[
            "Tableau",
            "Power BI",
            "Excel",
            "SQL",
            "Python",
            "R",
            "Google Analytics",
            "Looker",
        ]),
    );
    catalog.insert(
        TechCategory::Security,
        tags(&[
            "Nessus",
            "Wireshark",
            "Metasploit",
            "Burp Suite",
            "SIEM",
            "IDS/IPS",
            "Firewall Configuration",
            "Penetration Testing",
        ]),
    );
    catalog.insert(
        TechCategory::Business,
        tags(&[
            "Microsoft Office",
            "Salesforce",
            "SAP",
            "Oracle",
            "Jira",
            "Confluence",
            "SharePoint",
        ]),
    );
    catalog.insert(
        TechCategory::Engineering,
        tags(&[
            "AutoCAD",
            "SolidWorks",
            "MATLAB",
            "Ansys",
            "Catia",
            "Revit",
            "Fusion 360",
            "LabVIEW",
            "PTC Creo",
            "Civil 3D",
            "Inventor",
        ]),
    );
    catalog.insert(
        TechCategory::Design,
        tags(&[
            "Adobe Creative Suite",
            "Sketch",
            "Figma",
            "InVision",
            "Adobe XD",
            "Photoshop",
            "Illustrator",
        ]),
    );
    catalog
}
