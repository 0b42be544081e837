//! Fallback theme batch
//!
//! Served when theme generation fails on every attempt, so the rotation
//! always has material to work with.

use crate::core::question::Theme;

/// Built-in theme labels, in rotation order.
pub const DEFAULT_THEMES: &[&str] = &[
    "Love and relationships",
    "Nature and environment",
    "Art and creativity",
    "Technology and innovation",
    "Health and wellness",
    "History and culture",
    "Science and discovery",
    "Philosophy and ethics",
    "Education and learning",
    "Music and rhythm",
    "Sports and athleticism",
    "Food and nutrition",
    "Travel and adventure",
    "Fashion and style",
    "Books and literature",
    "Movies and entertainment",
    "Politics and governance",
    "Business and entrepreneurship",
    "Mind and consciousness",
    "Family and parenting",
    "Social media and networking",
    "Religion and spirituality",
    "Money and finance",
    "Language and communication",
    "Human behavior and psychology",
    "Space and astronomy",
    "Climate change and sustainability",
    "Dreams and aspirations",
    "Equality and social justice",
    "Gaming and virtual reality",
    "Artificial intelligence and robotics",
    "Creativity and imagination",
    "Emotions and feelings",
    "Healthcare and medicine",
    "Sportsmanship and teamwork",
    "Cuisine and gastronomy",
    "Historical events and figures",
    "Scientific advancements",
    "Ethical dilemmas and decision making",
    "Learning and growth",
    "Music genres and artists",
    "Film genres and directors",
    "Government policies and laws",
    "Startups and innovation",
    "Consciousness and perception",
    "Parenting styles and techniques",
    "Online communities and forums",
    "Religious practices and rituals",
    "Personal finance and budgeting",
    "Linguistic diversity and evolution",
    "Human cognition and memory",
    "Astrology and horoscopes",
    "Environmental conservation",
    "Personal development and self-improvement",
    "Sports strategies and tactics",
    "Culinary traditions and customs",
    "Ancient civilizations and empires",
    "Medical breakthroughs and treatments",
    "Moral values and principles",
    "Critical thinking and problem solving",
    "Musical instruments and techniques",
    "Film production and cinematography",
    "International relations and diplomacy",
    "Corporate culture and work-life balance",
    "Neuroscience and brain function",
    "Childhood development and milestones",
    "Online privacy and cybersecurity",
    "Religious tolerance and understanding",
    "Investment strategies and tips",
    "Language acquisition and fluency",
    "Social influence and conformity",
    "Space exploration and colonization",
    "Sustainable living and eco-friendly practices",
    "Self-reflection and introspection",
    "Sports psychology and mental training",
    "Globalization and cultural exchange",
    "Political ideologies and systems",
    "Entrepreneurial mindset and success",
    "Conscious living and mindfulness",
    "Positive psychology and happiness",
    "Music therapy and healing",
    "Film analysis and interpretation",
    "Human rights and advocacy",
    "Financial literacy and money management",
    "Multilingualism and translation",
    "Social media impact on society",
    "Religious extremism and radicalization",
    "Real estate investment and trends",
    "Language preservation and revitalization",
    "Social inequality and discrimination",
    "Climate change mitigation strategies",
    "Self-care and well-being",
    "Sports injuries and rehabilitation",
    "Artificial intelligence ethics",
    "Creativity in problem solving",
    "Emotional intelligence and empathy",
    "Healthcare access and affordability",
    "Sports analytics and data science",
    "Cultural appropriation and appreciation",
    "Ethical implications of technology",
];

/// The built-in themes as label strings.
pub fn default_theme_labels() -> Vec<String> {
    DEFAULT_THEMES.iter().map(|t| t.to_string()).collect()
}

/// The built-in themes as [`Theme`] values.
pub fn default_themes() -> Vec<Theme> {
    DEFAULT_THEMES.iter().filter_map(|t| Theme::try_new(*t)).collect()
}
