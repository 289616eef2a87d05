//! The closed set of job-role categories the classifier was trained on.
//!
//! Classifier output is positional: score `i` belongs to `ROLE_LABELS[i]`.
//! Reordering or editing this table requires retraining the classifier artifact.

pub const ROLE_LABELS: [&str; 43] = [
    "Accountant",
    "Advocate",
    "Agriculture",
    "Apparel",
    "Architecture",
    "Arts",
    "Automobile",
    "Aviation",
    "Banking",
    "Blockchain",
    "BPO",
    "Building and Construction",
    "Business Analyst",
    "Civil Engineer",
    "Consultant",
    "Data Science",
    "Database",
    "Designing",
    "DevOps",
    "Digital Media",
    "DotNet Developer",
    "Education",
    "Electrical Engineering",
    "ETL Developer",
    "Finance",
    "Food and Beverages",
    "Health and Fitness",
    "Human Resources",
    "Information Technology",
    "Java Developer",
    "Management",
    "Mechanical Engineer",
    "Network Security Engineer",
    "Operations Manager",
    "PMO",
    "Public Relations",
    "Python Developer",
    "React Developer",
    "Sales",
    "SAP Developer",
    "SQL Developer",
    "Testing",
    "Web Designing",
];

/// Position of `label` in [`ROLE_LABELS`], if it is one of the known roles.
#[cfg(test)]
pub fn label_index(label: &str) -> Option<usize> {
    ROLE_LABELS.iter().position(|l| *l == label)
}
