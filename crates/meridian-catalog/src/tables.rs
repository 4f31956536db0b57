//! Static catalog tables: dimension identifiers and compatibility edges.
//!
//! Edges are declared in both directions on purpose; `CatalogGraph::new`
//! verifies the two tables are exact mutual inverses before anything is
//! allowed to publish against them.

/// Solution identifiers, in declaration order.
pub(crate) const SOLUTIONS: &[&str] = &[
    "orderlyai",
    "hotelierai",
    "healthcareai",
    "retailai",
    "scheduleai",
    "supportai",
    "legalai",
    "propertyai",
    "eventai",
    "consultai",
    "wellnessai",
    "petcareai",
    "therapyai",
    "autoai",
    "tutorai",
    "callcenterai",
    "multitenantai",
    "analyticsai",
    "financialai",
    "insuranceai",
    "travelai",
    "logisticsai",
    "govai",
    "utilityai",
    "telecomai",
];

/// Industry identifiers, in declaration order.
pub(crate) const INDUSTRIES: &[&str] = &[
    "restaurants",
    "hospitality",
    "healthcare",
    "retail",
    "education",
    "automotive",
    "legal",
    "real-estate",
    "professional-services",
    "mental-health",
    "call-centers",
    "multitenant-enterprises",
    "financial-services",
    "insurance",
    "travel",
    "logistics",
    "government",
    "utilities",
    "telecommunications",
];

/// Market identifiers, in declaration order. Markets are an independent
/// dimension: every market pairs with every valid solution/industry edge.
pub(crate) const MARKETS: &[&str] = &[
    "united-states",
    "canada",
    "united-kingdom",
    "germany",
    "france",
    "india",
    "mexico",
    "brazil",
    "japan",
    "australia",
    "south-korea",
    "south-africa",
];

/// Industries served by each solution.
pub(crate) const SOLUTION_INDUSTRIES: &[(&str, &[&str])] = &[
    ("orderlyai", &["restaurants"]),
    ("hotelierai", &["hospitality"]),
    ("healthcareai", &["healthcare"]),
    ("retailai", &["retail"]),
    ("scheduleai", &["healthcare", "professional-services", "automotive", "education", "legal"]),
    ("supportai", &["call-centers", "professional-services", "retail", "telecommunications", "financial-services", "utilities"]),
    ("legalai", &["legal", "professional-services"]),
    ("propertyai", &["real-estate"]),
    ("eventai", &["hospitality", "professional-services"]),
    ("consultai", &["professional-services", "financial-services", "insurance"]),
    ("wellnessai", &["healthcare"]),
    ("petcareai", &["healthcare"]),
    ("therapyai", &["mental-health", "healthcare"]),
    ("autoai", &["automotive"]),
    ("tutorai", &["education"]),
    ("callcenterai", &["call-centers", "telecommunications", "financial-services", "utilities"]),
    ("multitenantai", &["multitenant-enterprises", "real-estate"]),
    ("analyticsai", &["restaurants", "hospitality", "healthcare", "retail", "education", "automotive", "legal", "real-estate", "professional-services", "mental-health", "call-centers", "multitenant-enterprises", "financial-services", "insurance"]),
    ("financialai", &["financial-services"]),
    ("insuranceai", &["insurance"]),
    ("travelai", &["travel", "hospitality"]),
    ("logisticsai", &["logistics"]),
    ("govai", &["government"]),
    ("utilityai", &["utilities"]),
    ("telecomai", &["telecommunications"]),
];

/// Solutions offered within each industry. Must mirror `SOLUTION_INDUSTRIES`.
pub(crate) const INDUSTRY_SOLUTIONS: &[(&str, &[&str])] = &[
    ("restaurants", &["orderlyai", "analyticsai"]),
    ("hospitality", &["hotelierai", "eventai", "analyticsai", "travelai"]),
    ("healthcare", &["healthcareai", "scheduleai", "wellnessai", "petcareai", "therapyai", "analyticsai"]),
    ("retail", &["retailai", "supportai", "analyticsai"]),
    ("education", &["scheduleai", "tutorai", "analyticsai"]),
    ("automotive", &["scheduleai", "autoai", "analyticsai"]),
    ("legal", &["scheduleai", "legalai", "analyticsai"]),
    ("real-estate", &["propertyai", "multitenantai", "analyticsai"]),
    ("professional-services", &["scheduleai", "supportai", "legalai", "eventai", "consultai", "analyticsai"]),
    ("mental-health", &["therapyai", "analyticsai"]),
    ("call-centers", &["supportai", "callcenterai", "analyticsai"]),
    ("multitenant-enterprises", &["multitenantai", "analyticsai"]),
    ("financial-services", &["supportai", "consultai", "callcenterai", "analyticsai", "financialai"]),
    ("insurance", &["consultai", "analyticsai", "insuranceai"]),
    ("travel", &["travelai"]),
    ("logistics", &["logisticsai"]),
    ("government", &["govai"]),
    ("utilities", &["supportai", "callcenterai", "utilityai"]),
    ("telecommunications", &["supportai", "callcenterai", "telecomai"]),
];
