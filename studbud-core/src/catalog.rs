//! Topic catalog: subject name -> ordered syllabus topics.

use std::collections::BTreeMap;

/// Source of syllabus topics for a subject.
///
/// Total: unknown subjects get a non-empty fallback list.
pub trait TopicCatalog {
    fn topics_for(&self, subject: &str) -> Vec<String>;
}

const MATH_10: &[&str] = &[
    "Real Numbers",
    "Polynomials",
    "Pair of Linear Equations in Two Variables",
    "Quadratic Equations",
    "Arithmetic Progressions",
    "Triangles",
    "Coordinate Geometry",
    "Introduction to Trigonometry",
    "Some Applications of Trigonometry",
    "Circles",
    "Constructions",
    "Areas Related to Circles",
    "Surface Areas and Volumes",
    "Statistics",
    "Probability",
];

const SCIENCE_10: &[&str] = &[
    "Chemical Reactions and Equations",
    "Acids, Bases and Salts",
    "Metals and Non-metals",
    "Carbon and Its Compounds",
    "Periodic Classification of Elements",
    "Life Processes",
    "Control and Coordination",
    "How do Organisms Reproduce?",
    "Heredity and Evolution",
    "Light- Reflection and Refraction",
    "Human Eye and Colourful World",
    "Electricity",
    "Magnetic Effects of Electric Current",
    "Sources of Energy",
    "Our Environment",
    "Management of Natural Resources",
];

const PHYSICS_11_12: &[&str] = &[
    "Units and Measurements",
    "Motion in a Straight Line",
    "Motion in a Plane",
    "Laws of Motion",
    "Work, Energy and Power",
    "System of Particles and Rotational Motion",
    "Gravitation",
    "Mechanical Properties of Solids",
    "Mechanical Properties of Fluids",
    "Thermal Properties of Matter",
    "Thermodynamics",
    "Kinetic Theory",
    "Oscillations",
    "Waves",
    "Electrostatic Potential and Capacitance",
    "Current Electricity",
    "Moving Charges and Magnetism",
    "Magnetism and Matter",
    "Electromagnetic Induction",
    "Alternating Current",
    "Electromagnetic Waves",
    "Ray Optics and Optical Instruments",
    "Wave Optics",
    "Dual Nature of Radiation and Matter",
    "Atoms",
    "Nuclei",
    "Semiconductor Electronics",
];

// Repeated entries are part of the syllabus listing and kept as-is.
const MATH_11_12: &[&str] = &[
    "Sets",
    "Relations and Functions",
    "Trigonometric Functions",
    "Principle of Mathematical Induction",
    "Complex Numbers and Quadratic Equations",
    "Linear Inequalities",
    "Permutations and Combinations",
    "Binomial Theorem",
    "Sequence and Series",
    "Straight Lines",
    "Conic Sections",
    "Introduction to Three Dimensional Geometry",
    "Limits and Derivatives",
    "Mathematical Reasoning",
    "Statistics",
    "Probability",
    "Relations and Functions",
    "Inverse Trigonometric Functions",
    "Matrices",
    "Determinants",
    "Continuity and Differentiability",
    "Application of Derivatives",
    "Integrals",
    "Application of Integrals",
    "Differential Equations",
    "Vector Algebra",
    "Three Dimensional Geometry",
    "Linear Programming",
    "Probability",
];

const BTECH_CS: &[&str] = &[
    "Data Structures",
    "Algorithms",
    "Operating Systems",
    "Computer Networks",
    "Databases",
    "Software Engineering",
    "Artificial Intelligence",
    "Machine Learning",
    "Computer Architecture",
    "Theory of Computation",
    "Compiler Design",
    "Web Development",
    "Mobile App Development",
    "Cloud Computing",
    "Cybersecurity",
    "Data Mining",
    "Big Data Analytics",
    "Distributed Systems",
];

const BTECH_EE: &[&str] = &[
    "Circuit Theory",
    "Signals and Systems",
    "Control Systems",
    "Electromagnetic Fields",
    "Power Systems",
    "Electrical Machines",
    "Digital Electronics",
    "Analog Electronics",
    "Microprocessors",
    "Power Electronics",
    "Communication Systems",
    "Embedded Systems",
    "VLSI Design",
];

const FALLBACK: &[&str] = &["Topic 1", "Topic 2", "Topic 3", "Topic 4", "Topic 5"];

/// Subject names the builtin catalog recognizes (lowercase).
pub fn known_subjects() -> &'static [&'static str] {
    &[
        "10th grade math",
        "10th grade science",
        "11th grade physics",
        "12th grade physics",
        "11th grade math",
        "12th grade math",
        "btech computer science",
        "btech electrical engineering",
    ]
}

/// Builtin syllabus lists, 10th grade through B.Tech.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    fn lookup(subject: &str) -> &'static [&'static str] {
        match subject.to_lowercase().as_str() {
            "10th grade math" => MATH_10,
            "10th grade science" => SCIENCE_10,
            "11th grade physics" | "12th grade physics" => PHYSICS_11_12,
            "11th grade math" | "12th grade math" => MATH_11_12,
            "btech computer science" => BTECH_CS,
            "btech electrical engineering" => BTECH_EE,
            _ => FALLBACK,
        }
    }
}

impl TopicCatalog for BuiltinCatalog {
    fn topics_for(&self, subject: &str) -> Vec<String> {
        Self::lookup(subject).iter().map(|t| t.to_string()).collect()
    }
}

/// User-supplied subjects consulted before the builtin lists.
#[derive(Debug, Clone, Default)]
pub struct LayeredCatalog {
    // lowercase subject -> topics
    extra: BTreeMap<String, Vec<String>>,
}

impl LayeredCatalog {
    pub fn new(extra: &BTreeMap<String, Vec<String>>) -> Self {
        Self {
            extra: extra
                .iter()
                .filter(|(_, topics)| !topics.is_empty())
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect(),
        }
    }
}

impl TopicCatalog for LayeredCatalog {
    fn topics_for(&self, subject: &str) -> Vec<String> {
        match self.extra.get(&subject.to_lowercase()) {
            Some(topics) => topics.clone(),
            None => BuiltinCatalog.topics_for(subject),
        }
    }
}
