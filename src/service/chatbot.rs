use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{hash_map::DefaultHasher, HashMap, HashSet};
use std::hash::{Hash, Hasher};

pub const GREETING: &str =
    "Hello! I'm the Aqarat property assistant. How can I help you with your real estate needs today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatCategory {
    PropertySearch,
    PriceInquiry,
    AuctionInfo,
    PropertyFeatures,
}

const CATEGORIES: [ChatCategory; 4] = [
    ChatCategory::PropertySearch,
    ChatCategory::PriceInquiry,
    ChatCategory::AuctionInfo,
    ChatCategory::PropertyFeatures,
];

/// The fixed training corpus: a dozen example queries. There is no
/// learning loop; this is the entire labelled set.
fn training_documents() -> Vec<(ChatCategory, &'static str)> {
    vec![
        (ChatCategory::PropertySearch, "show me properties in Riyadh"),
        (ChatCategory::PropertySearch, "find villas in Jeddah"),
        (ChatCategory::PropertySearch, "apartments for rent"),
        (ChatCategory::PriceInquiry, "what is the price"),
        (ChatCategory::PriceInquiry, "how much does it cost"),
        (ChatCategory::PriceInquiry, "payment terms"),
        (ChatCategory::AuctionInfo, "how do auctions work"),
        (ChatCategory::AuctionInfo, "bidding process"),
        (ChatCategory::AuctionInfo, "current auction status"),
        (ChatCategory::PropertyFeatures, "tell me about amenities"),
        (ChatCategory::PropertyFeatures, "what features are included"),
        (ChatCategory::PropertyFeatures, "parking availability"),
    ]
}

fn responses_for(category: ChatCategory) -> &'static [&'static str] {
    match category {
        ChatCategory::PropertySearch => &[
            "I'll help you find the perfect property. Could you specify your preferred location and budget?",
            "Let me search our database for properties matching your criteria.",
            "I can show you available properties. What specific features are you looking for?",
        ],
        ChatCategory::PriceInquiry => &[
            "I can help you with pricing information. Which property are you interested in?",
            "Would you like to know about our payment plans and financing options?",
            "I can provide you with detailed pricing and payment terms.",
        ],
        ChatCategory::AuctionInfo => &[
            "Our auction system is designed to be transparent and fair. Would you like to know more about the bidding process?",
            "I can guide you through the auction registration and bidding process.",
            "Let me explain how our property auctions work.",
        ],
        ChatCategory::PropertyFeatures => &[
            "I can tell you about all the features and amenities of our properties.",
            "Would you like to know about specific features or general amenities?",
            "Our properties come with various premium features. What specifically interests you?",
        ],
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Multinomial naive Bayes over word tokens, trained once at startup.
#[derive(Debug)]
pub struct ChatClassifier {
    word_counts: HashMap<ChatCategory, HashMap<String, usize>>,
    token_totals: HashMap<ChatCategory, usize>,
    document_counts: HashMap<ChatCategory, usize>,
    total_documents: usize,
    vocabulary_size: usize,
}

impl ChatClassifier {
    pub fn train() -> Self {
        let mut word_counts: HashMap<ChatCategory, HashMap<String, usize>> = HashMap::new();
        let mut token_totals: HashMap<ChatCategory, usize> = HashMap::new();
        let mut document_counts: HashMap<ChatCategory, usize> = HashMap::new();
        let mut vocabulary: HashSet<String> = HashSet::new();
        let mut total_documents = 0;

        for (category, document) in training_documents() {
            total_documents += 1;
            *document_counts.entry(category).or_insert(0) += 1;

            for token in tokenize(document) {
                vocabulary.insert(token.clone());
                *token_totals.entry(category).or_insert(0) += 1;
                *word_counts
                    .entry(category)
                    .or_default()
                    .entry(token)
                    .or_insert(0) += 1;
            }
        }

        ChatClassifier {
            word_counts,
            token_totals,
            document_counts,
            total_documents,
            vocabulary_size: vocabulary.len(),
        }
    }

    /// Argmax of log-prior + Laplace-smoothed log-likelihood. Ties resolve
    /// to the earlier category in declaration order, which keeps the
    /// outcome stable for inputs with no known words.
    pub fn classify(&self, message: &str) -> ChatCategory {
        let tokens = tokenize(message);

        let mut best = CATEGORIES[0];
        let mut best_score = f64::NEG_INFINITY;

        for category in CATEGORIES {
            let documents = self.document_counts.get(&category).copied().unwrap_or(0);
            let mut score = (documents as f64 / self.total_documents as f64).ln();

            let category_total = self.token_totals.get(&category).copied().unwrap_or(0);
            let denominator = (category_total + self.vocabulary_size) as f64;

            for token in &tokens {
                let count = self
                    .word_counts
                    .get(&category)
                    .and_then(|counts| counts.get(token))
                    .copied()
                    .unwrap_or(0);
                score += ((count + 1) as f64 / denominator).ln();
            }

            if score > best_score {
                best_score = score;
                best = category;
            }
        }

        best
    }

    /// Canned reply for a visitor message. The pick is seeded from a hash
    /// of the message itself, so the same input always gets the same
    /// string while different inputs still spread across the pool.
    pub fn reply(&self, message: &str) -> String {
        let category = self.classify(message);
        let pool = responses_for(category);

        let mut hasher = DefaultHasher::new();
        message.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());

        pool[rng.random_range(0..pool.len())].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bidding_process_lands_in_auction_info() {
        let classifier = ChatClassifier::train();

        assert_eq!(
            classifier.classify("bidding process"),
            ChatCategory::AuctionInfo
        );

        let reply = classifier.reply("bidding process");
        assert!(responses_for(ChatCategory::AuctionInfo).contains(&reply.as_str()));
    }

    #[test]
    fn each_training_document_classifies_to_its_own_label() {
        let classifier = ChatClassifier::train();

        for (category, document) in training_documents() {
            assert_eq!(
                classifier.classify(document),
                category,
                "misclassified: {document:?}"
            );
        }
    }

    #[test]
    fn replies_are_deterministic_per_message() {
        let classifier = ChatClassifier::train();

        let first = classifier.reply("what is the price of the villa");
        let second = classifier.reply("what is the price of the villa");

        assert_eq!(first, second);
        assert!(responses_for(ChatCategory::PriceInquiry).contains(&first.as_str()));
    }

    #[test]
    fn tokenizer_strips_punctuation_and_case() {
        assert_eq!(
            tokenize("How much does it COST?!"),
            vec!["how", "much", "does", "it", "cost"]
        );
    }
}
