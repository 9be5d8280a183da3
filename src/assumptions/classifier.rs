//! Ordered keyword rules that map free-text majors and careers to canonical tags
//!
//! Rules are evaluated top to bottom and the first match wins, so a specific
//! category must appear before any broader category whose pattern it also
//! matches ("brain surgeon" is neurosurgery, not surgery or medicine).

use once_cell::sync::Lazy;
use regex::Regex;

/// Careers that require a medical doctorate and residency
pub const MEDICAL_DOCTORATE_TAGS: [&str; 3] = ["neurosurgery", "surgery", "medicine"];

/// Majors that prepare for medical school admission
pub const HEALTH_MAJOR_TAGS: [&str; 3] = ["nursing", "health", "biology"];

/// Majors whose graduates see widely varying earnings
pub const VARIABLE_EARNINGS_MAJOR_TAGS: [&str; 2] = ["arts", "humanities"];

/// Major rule table: (tag, pattern). Order matters.
const MAJOR_RULES: &[(&str, &str)] = &[
    ("nursing", r"\bnurs"),
    ("computer_science", r"computer|software|\bcs\b|programming|information tech|^it$|\bit (major|degree|program)|data science|cyber|artificial intelligence|machine learning"),
    ("engineering", r"engineer"),
    ("health", r"pre-?med|health|kinesiology|exercise science|pharm|nutrition|dental|medic"),
    ("biology", r"\bbio|neuroscience|life science|molecular|genetic|zoolog|ecolog|microbio"),
    ("mathematics", r"\bmath|statistic|actuar"),
    ("physical_sciences", r"chemi|physic|astronom|geolog|earth science"),
    ("business", r"business|financ|account|econom|marketing|management|\bmba\b|entrepreneur"),
    ("psychology", r"psych"),
    ("education", r"educat|teach"),
    ("social_sciences", r"sociolog|politic|poli sci|anthropolog|criminal|government|international relations|social work|pre-?law"),
    ("communications", r"communicat|journalis|media|public relations"),
    ("arts", r"\barts?\b|music|theat|dance|film|design|photograph|paint|sculpt|drama|creative writing"),
    ("humanities", r"english|histor|philosoph|literat|languag|linguist|classics|religio|humanit|spanish|french"),
];

/// Career rule table: (tag, pattern). Order matters.
const CAREER_RULES: &[(&str, &str)] = &[
    ("neurosurgery", r"neuro\s*-?\s*surg|brain surg|spin(e|al) surg"),
    ("physician_assistant", r"physicians?'?s? assistant|\bpa-c\b"),
    ("dental_hygiene", r"dental hygien|hygienist"),
    ("dentistry", r"dentist|dental|orthodont|oral surg"),
    ("technician", r"surgical tech|\bvet(erinary)? tech|lab(oratory)? tech|medical tech"),
    ("veterinary", r"veterinar|\bvet\b"),
    ("surgery", r"surg"),
    ("physical_therapy", r"physical therap|physiotherap|occupational therap"),
    ("nursing", r"\bnurse|nursing"),
    ("medicine", r"physician|\bdoctor\b|\bmd\b|pediatric|cardiolog|dermatolog|psychiatr|radiolog|anesthes|oncolog|\bmedicine\b"),
    ("pharmacy", r"pharmac"),
    ("clinical_psychology", r"psycholog|therapist|counsel"),
    ("law", r"lawyer|attorney|\blaw\b|legal|judge"),
    ("software_engineering", r"software|developer|programmer|coder|web dev|computer scien"),
    ("data_science", r"data scien|data analy|machine learning|\bai\b|artificial intel"),
    ("engineering", r"engineer"),
    ("research_science", r"research|scientist|\bphd\b|professor|academ"),
    ("finance", r"financ|invest|\bbank|trader|actuar|wealth"),
    ("accounting", r"account|\bcpa\b|auditor|\btax"),
    ("teaching", r"teach|educator|tutor"),
    ("technician", r"technician|\btech\b|mechanic|help desk"),
    ("trades", r"electrician|plumb|carpent|welder|hvac|construction|contractor"),
    ("social_work", r"social work"),
    ("business_management", r"manag|business|entrepreneur|consult|executive|\bceo\b|operations"),
    ("marketing", r"marketing|advertis|\bsales|public relations|brand"),
    ("arts_design", r"artist|design|music|actor|actress|animat|photograph|film|paint|dancer|illustrat"),
    ("writing_journalism", r"writer|author|journalis|editor|reporter"),
];

static MAJORS: Lazy<CategoryClassifier> =
    Lazy::new(|| CategoryClassifier::from_table(MAJOR_RULES, &["undecided"], "undecided"));

static CAREERS: Lazy<CategoryClassifier> =
    Lazy::new(|| CategoryClassifier::from_table(CAREER_RULES, &["not_sure"], "not_sure"));

/// A single classification rule
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub tag: String,
    pub pattern: Regex,
}

/// Data-driven first-match classifier over an ordered rule table
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
    /// Every canonical tag, including tags with no rule (e.g. the default)
    tags: Vec<String>,
    default_tag: String,
}

impl CategoryClassifier {
    /// Build from pre-compiled rules
    pub fn new(rules: Vec<CategoryRule>, extra_tags: &[&str], default_tag: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();
        let rule_tags = rules.iter().map(|r| r.tag.as_str());
        for tag in rule_tags.chain(extra_tags.iter().copied()).chain(std::iter::once(default_tag)) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self {
            rules,
            tags,
            default_tag: default_tag.to_string(),
        }
    }

    fn from_table(table: &[(&str, &str)], extra_tags: &[&str], default_tag: &str) -> Self {
        let rules = table
            .iter()
            .map(|(tag, pattern)| CategoryRule {
                tag: tag.to_string(),
                pattern: Regex::new(pattern).expect("built-in classifier pattern must compile"),
            })
            .collect();
        Self::new(rules, extra_tags, default_tag)
    }

    /// Built-in major classifier (default tag "undecided")
    pub fn majors() -> &'static CategoryClassifier {
        &MAJORS
    }

    /// Built-in career classifier (default tag "not_sure")
    pub fn careers() -> &'static CategoryClassifier {
        &CAREERS
    }

    /// Classify free text. Never fails; unmatched or empty text yields the default tag.
    pub fn classify(&self, text: &str) -> &str {
        let lowered = text.trim().to_lowercase();
        if lowered.is_empty() {
            return &self.default_tag;
        }

        let normalized = lowered.replace(&[' ', '-'][..], "_");
        if let Some(tag) = self.tags.iter().find(|t| **t == normalized) {
            return tag;
        }

        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(&lowered))
            .map(|rule| rule.tag.as_str())
            .unwrap_or(self.default_tag.as_str())
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

/// Display label for a major tag
pub fn major_label(tag: &str) -> String {
    match tag {
        "computer_science" => "Computer Science".to_string(),
        "engineering" => "Engineering".to_string(),
        "nursing" => "Nursing".to_string(),
        "health" => "Health Sciences".to_string(),
        "biology" => "Biology".to_string(),
        "mathematics" => "Mathematics".to_string(),
        "physical_sciences" => "Physical Sciences".to_string(),
        "business" => "Business".to_string(),
        "psychology" => "Psychology".to_string(),
        "education" => "Education".to_string(),
        "social_sciences" => "Social Sciences".to_string(),
        "communications" => "Communications".to_string(),
        "arts" => "Arts".to_string(),
        "humanities" => "Humanities".to_string(),
        "undecided" => "Undecided".to_string(),
        other => other
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brain_surgeon_is_neurosurgery() {
        let careers = CategoryClassifier::careers();
        assert_eq!(careers.classify("I want to be a brain surgeon"), "neurosurgery");
        assert_eq!(careers.classify("Neurosurgeon"), "neurosurgery");
        assert_eq!(careers.classify("neuro-surgery"), "neurosurgery");
    }

    #[test]
    fn test_specific_medical_tags_before_general() {
        let careers = CategoryClassifier::careers();
        assert_eq!(careers.classify("heart surgeon"), "surgery");
        assert_eq!(careers.classify("oral surgeon"), "dentistry");
        assert_eq!(careers.classify("family physician"), "medicine");
        assert_eq!(careers.classify("Doctor of Physical Therapy"), "physical_therapy");
        assert_eq!(careers.classify("pediatric nurse"), "nursing");
        assert_eq!(careers.classify("registered nurse"), "nursing");
        assert_eq!(careers.classify("veterinary surgeon"), "veterinary");
        assert_eq!(careers.classify("surgical technician"), "technician");
        assert_eq!(careers.classify("surgical tech"), "technician");
        assert_eq!(careers.classify("surgical technologist"), "technician");
        assert_eq!(careers.classify("vet tech"), "technician");
        assert_eq!(careers.classify("physician assistant"), "physician_assistant");
        assert_eq!(careers.classify("physician's assistant"), "physician_assistant");
        assert_eq!(careers.classify("dental hygienist"), "dental_hygiene");
    }

    #[test]
    fn test_rule_tags_are_listed_once() {
        let careers = CategoryClassifier::careers();
        let technician = careers.tags().iter().filter(|t| *t == "technician").count();
        assert_eq!(technician, 1);
    }

    #[test]
    fn test_technology_careers() {
        let careers = CategoryClassifier::careers();
        assert_eq!(careers.classify("software engineer at a startup"), "software_engineering");
        assert_eq!(careers.classify("data scientist"), "data_science");
        assert_eq!(careers.classify("civil engineer"), "engineering");
        assert_eq!(careers.classify("research scientist"), "research_science");
        assert_eq!(careers.classify("community college technician"), "technician");
    }

    #[test]
    fn test_exact_tag_match_wins() {
        let careers = CategoryClassifier::careers();
        assert_eq!(careers.classify("software_engineering"), "software_engineering");
        assert_eq!(careers.classify("Clinical Psychology"), "clinical_psychology");
        assert_eq!(careers.classify("not sure"), "not_sure");
    }

    #[test]
    fn test_default_tags() {
        assert_eq!(CategoryClassifier::careers().classify(""), "not_sure");
        assert_eq!(CategoryClassifier::careers().classify("astronaut"), "not_sure");
        assert_eq!(CategoryClassifier::majors().classify("   "), "undecided");
        assert_eq!(CategoryClassifier::majors().classify("general studies"), "undecided");
    }

    #[test]
    fn test_undecided_sentences_keep_default_major() {
        let majors = CategoryClassifier::majors();
        assert_eq!(majors.classify("not sure what it is yet"), "undecided");
        assert_eq!(majors.classify("I'll figure it out"), "undecided");
        assert_eq!(majors.classify("IT"), "computer_science");
        assert_eq!(majors.classify("IT degree"), "computer_science");
        assert_eq!(majors.classify("Information Technology"), "computer_science");
    }

    #[test]
    fn test_major_rules() {
        let majors = CategoryClassifier::majors();
        assert_eq!(majors.classify("Fine Arts"), "arts");
        assert_eq!(majors.classify("Biomedical Engineering"), "engineering");
        assert_eq!(majors.classify("Molecular Biology"), "biology");
        assert_eq!(majors.classify("pre-med"), "health");
        assert_eq!(majors.classify("Nursing (BSN)"), "nursing");
        assert_eq!(majors.classify("Computer Science"), "computer_science");
        assert_eq!(majors.classify("Artificial Intelligence"), "computer_science");
        assert_eq!(majors.classify("English Literature"), "humanities");
        assert_eq!(majors.classify("Economics"), "business");
    }

    #[test]
    fn test_every_rule_tag_is_canonical() {
        let careers = CategoryClassifier::careers();
        for rule in careers.rules() {
            assert!(careers.tags().contains(&rule.tag));
        }
        assert!(careers.tags().iter().any(|t| t == "not_sure"));
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = vec![
            CategoryRule { tag: "pilot".to_string(), pattern: Regex::new("pilot|aviat").unwrap() },
            CategoryRule { tag: "transport".to_string(), pattern: Regex::new("driver|pilot").unwrap() },
        ];
        let classifier = CategoryClassifier::new(rules, &[], "other");
        assert_eq!(classifier.classify("airline pilot"), "pilot");
        assert_eq!(classifier.classify("truck driver"), "transport");
        assert_eq!(classifier.classify("chef"), "other");
    }

    #[test]
    fn test_major_label() {
        assert_eq!(major_label("computer_science"), "Computer Science");
        assert_eq!(major_label("marine_studies"), "Marine Studies");
    }
}
