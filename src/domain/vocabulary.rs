//! Fashion domain vocabulary.
//!
//! Static term sets used to validate that free-text answers are on-topic
//! and to filter stopwords out of descriptions. All sets are lowercase,
//! built once at first use, and shared read-only across sessions.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Fashion keep-list: terms preserved through stopword filtering and used
/// to judge whether free text is fashion-related.
static DOMAIN_TERM_LIST: &[&str] = &[
    // Colors
    "black", "white", "gray", "grey", "silver", "charcoal", "graphite", "slate", "navy", "blue",
    "light", "dark", "midnight", "indigo", "cyan", "teal", "aqua", "turquoise", "green", "olive",
    "khaki", "lime", "forest", "emerald", "mint", "brown", "tan", "beige", "camel", "chocolate",
    "mocha", "sand", "taupe", "red", "maroon", "burgundy", "wine", "crimson", "pink", "blush",
    "rose", "magenta", "fuchsia", "purple", "violet", "lavender", "lilac", "orange", "rust",
    "terracotta", "coral", "peach", "apricot", "yellow", "mustard", "gold", "golden", "cream",
    "ivory", "ecru", "offwhite", "off-white",
    // Materials
    "cotton", "denim", "leather", "faux", "suede", "wool", "cashmere", "merino", "linen", "silk",
    "satin", "viscose", "rayon", "polyester", "nylon", "spandex", "elastane", "lyocell", "tencel",
    "modal", "acrylic", "twill", "poplin", "corduroy", "velvet", "fleece", "gabardine", "down",
    "shearling", "sherpa", "canvas", "mesh", "lace", "chiffon", "organza", "sequin", "sequins",
    "boucle",
    // Patterns & finishes
    "solid", "plain", "striped", "stripes", "pinstripe", "pin-stripe", "checks", "checked",
    "plaid", "gingham", "houndstooth", "herringbone", "jacquard", "floral", "paisley", "abstract",
    "geometric", "animal", "leopard", "zebra", "camouflage", "camo", "polkadot", "polka-dot",
    "chevron", "argyle", "windowpane", "window-pane", "microcheck", "micro-check", "microstripe",
    "micro-stripe", "ribbed", "waffle", "cable", "quilted", "matte", "glossy", "shiny",
    "metallic", "distressed", "washed", "acid", "stonewashed", "raw", "selvedge", "seersucker",
    "brushed", "waxed", "garmentdyed", "garment-dyed",
    // Fits & silhouettes
    "slim", "skinny", "regular", "relaxed", "loose", "oversized", "tapered", "straight",
    "bootcut", "flare", "flared", "wide", "baggy", "cropped", "fitted", "boxy", "athletic",
    "tailored", "high", "mid", "low", "rise", "drop", "waist", "petite", "tall", "curvy",
    "maternity", "longline", "long-line",
    // Garment parts & construction
    "crew", "crewneck", "vneck", "v-neck", "scoop", "boatneck", "turtleneck", "mockneck",
    "henley", "button", "buttoned", "buttons", "zip", "zipper", "halfzip", "half-zip", "fullzip",
    "full-zip", "collar", "spread", "point", "buttondown", "button-down", "band", "mandarin",
    "shawl", "lapel", "notch", "peak", "double", "single", "breasted", "sleeve", "shortsleeve",
    "short-sleeve", "longsleeve", "long-sleeve", "sleeveless", "cap", "raglan", "dolman", "cuff",
    "cuffed", "hem", "rawhem", "raw-hem", "curvedhem", "curved-hem", "splithem", "split-hem",
    "drawstring", "elastic", "elasticated", "belt", "belted", "pleat", "pleated", "dart", "yoke",
    "hood", "hooded",
    // Item types
    "tshirt", "t-shirt", "tee", "shirt", "oxford", "polo", "blouse", "top", "tank", "camisole",
    "sweater", "jumper", "hoodie", "sweatshirt", "cardigan", "jacket", "blazer", "coat",
    "trench", "puffer", "parka", "gilet", "vest", "overcoat", "peacoat", "bomber", "biker",
    "trucker", "windbreaker", "anorak", "shacket", "overshirt", "jeans", "chinos", "trousers",
    "pants", "shorts", "skirt", "dress", "jumpsuit", "playsuit", "suit", "suiting", "sweatpants",
    "joggers", "leggings", "tights", "cargos", "cargo", "slacks",
    // Footwear & accessories
    "sneakers", "trainers", "running", "shoes", "boots", "chelsea", "derby", "loafer", "loafers",
    "brogue", "brogues", "monkstrap", "monk-strap", "sandals", "heels", "flats", "mules",
    "clogs", "espadrille", "espadrilles", "slides", "flipflops", "flip-flops", "bag", "backpack",
    "tote", "crossbody", "cross-body", "scarf", "beanie", "hat", "gloves", "socks", "tie",
    "bowtie", "bow-tie", "wallet", "briefcase", "duffle", "duffel", "satchel", "watch",
    "sunglasses",
    // Style/occasion cues
    "casual", "smart", "formal", "business", "professional", "businesscasual", "business-casual",
    "businessformal", "business-formal", "smartcasual", "smart-casual", "streetwear", "sporty",
    "athleisure", "athflow", "minimal", "minimalist", "minimalistic", "maximalist", "classic",
    "vintage", "retro", "modern", "contemporary", "chic", "elegant", "sophisticated", "refined",
    "elevated", "polished", "sleek", "clean", "crisp", "edgy", "preppy", "boho", "bohemian",
    "artsy", "avantgarde", "avant-garde", "androgynous", "genderneutral", "gender-neutral",
    "rugged", "utilitarian", "utility", "workwear", "heritage", "artisan", "artisanal",
    "monochrome", "monochromatic", "colorblock", "color-block", "pastel", "neon", "earthy",
    "quietluxury", "quiet-luxury", "oldmoney", "old-money", "luxe", "luxury", "normcore",
    "gorpcore", "cottagecore", "balletcore", "barbiecore", "regencycore", "darkacademia",
    "dark-academia", "mermaidcore", "indiesleaze", "indie", "y2k", "70s", "80s", "90s", "2000s",
    "grunge", "punk", "goth", "emo", "rock", "metal", "techwear", "cyberpunk",
    "retro-futuristic", "retrofuturistic", "western", "cowboy", "cowgirl", "americana",
    "military", "safari", "nautical", "coastal", "coastalgrandma", "coastal-grandma",
    // Occasions & contexts
    "wedding", "weddingguest", "wedding-guest", "bridesmaid", "groomsman", "party", "evening",
    "office", "work", "weekend", "holiday", "vacation", "travel", "airport", "airplane",
    "outdoor", "hiking", "gym", "training", "festival", "concert", "club", "clubbing",
    "nightout", "night-out", "datenight", "date-night", "date", "brunch", "dinner", "picnic",
    "beach", "pool", "resort", "cruise", "apresski", "apres-ski", "ski", "snowboard", "rainy",
    "rainwear", "winter", "summer", "spring", "fall", "autumn", "interview", "presentation",
    "meeting", "clientmeeting", "client-meeting", "conference", "networking", "graduation",
    "gala", "cocktail", "blacktie", "black-tie", "whitetie", "white-tie", "commute", "errands",
    "loungewear", "home", "workfromhome", "work-from-home", "officeparty", "office-party",
    "teamdinner", "team-dinner",
    // Lengths & coverage
    "mini", "midi", "maxi", "ankle", "fulllength", "full-length", "knee", "above", "below",
    "threequarter", "three-quarter", "7/8", "crop", "short", "long",
    // Washes & treatments
    "lightwash", "light-wash", "midwash", "mid-wash", "darkwash", "dark-wash", "vintagewash",
    "vintage-wash", "rinse", "rawdenim", "fade", "faded", "whiskered", "whiskering", "destroyed",
    // Other descriptive terms
    "breathable", "stretch", "stretchy", "soft", "cozy", "warm", "lightweight", "heavyweight",
    "midweight", "waterproof", "water-resistant", "waterrepellent", "water-repellent",
    "rainproof", "windproof", "insulated", "lined", "unlined", "packable", "quickdry",
    "quick-dry", "wrinklefree", "wrinkle-free",
];

/// Item-type tokens: the subset of garment names used to detect whether a
/// comma chunk names a single recognizable item or several mashed together.
static ITEM_TYPE_TOKEN_LIST: &[&str] = &[
    // Tops
    "tshirt", "t-shirt", "tee", "tees", "shirt", "shirts", "oxford", "polo", "blouse", "top",
    "tops", "tank", "camisole", "sweater", "jumpers", "jumper", "hoodie", "sweatshirt",
    "cardigan", "jacket", "jackets", "blazer", "coat", "coats", "trench", "puffer", "parka",
    "gilet", "vest", "overcoat", "peacoat", "bomber", "biker", "trucker", "windbreaker",
    "anorak", "shacket", "overshirt",
    // Bottoms
    "jeans", "jean", "chinos", "trousers", "pants", "shorts", "skirt", "skirts", "dress",
    "dresses", "jumpsuit", "playsuit", "suit", "suits", "sweatpants", "joggers", "leggings",
    "tights", "cargos", "cargo", "slacks", "bottoms", "bottomwear",
    // Footwear
    "sneakers", "trainers", "shoes", "boots", "chelsea", "derby", "loafer", "loafers",
    "sandals", "heels", "flats", "mules", "clogs", "brogue", "brogues", "monkstrap",
    "monk-strap", "espadrille", "espadrilles", "slides", "flipflops", "flip-flops", "footwear",
    // Accessories
    "bag", "backpack", "tote", "crossbody", "belt", "scarf", "beanie", "cap", "hat", "gloves",
    "socks", "tie", "bowtie", "wallet", "briefcase", "duffle", "duffel", "satchel", "watch",
    "sunglasses", "headwear", "eyewear",
    // Category synonyms
    "outerwear", "underwear", "lingerie", "sleepwear", "nightwear", "swimwear", "activewear",
    "athleisure", "loungewear", "topwear",
];

/// General English stopword list (the usual corpus list; contraction
/// fragments are kept for parity with hyphen-splitting tokenization).
static GENERAL_STOPWORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Full fashion keep-list.
pub static DOMAIN_TERMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DOMAIN_TERM_LIST.iter().copied().collect());

/// Garment item-type tokens.
pub static ITEM_TYPE_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ITEM_TYPE_TOKEN_LIST.iter().copied().collect());

/// Stopwords actually removed from descriptions: the general list minus
/// anything that is also a fashion term.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    GENERAL_STOPWORD_LIST
        .iter()
        .copied()
        .filter(|w| !DOMAIN_TERMS.contains(w))
        .collect()
});

/// Combined hints used to validate meaningful fashion-related input.
pub static DOMAIN_HINTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    DOMAIN_TERMS
        .iter()
        .chain(ITEM_TYPE_TOKENS.iter())
        .copied()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_terms_are_lowercase() {
        for term in DOMAIN_TERMS.iter().chain(ITEM_TYPE_TOKENS.iter()) {
            assert_eq!(*term, term.to_lowercase(), "term not lowercase: {term}");
        }
    }

    #[test]
    fn stopwords_never_overlap_domain_terms() {
        for word in STOPWORDS.iter() {
            assert!(!DOMAIN_TERMS.contains(word), "domain term in stopwords: {word}");
        }
    }

    #[test]
    fn domain_hints_cover_both_sets() {
        assert!(DOMAIN_HINTS.contains("navy"));
        assert!(DOMAIN_HINTS.contains("bottomwear"));
        assert!(DOMAIN_HINTS.len() >= DOMAIN_TERMS.len());
        assert!(DOMAIN_HINTS.len() >= ITEM_TYPE_TOKENS.len());
    }

    #[test]
    fn item_types_include_common_garments() {
        for item in ["jeans", "t-shirt", "blazer", "sneakers", "hat"] {
            assert!(ITEM_TYPE_TOKENS.contains(item), "missing item type: {item}");
        }
    }

    #[test]
    fn fashion_stopword_collisions_stay_in_domain() {
        // "down", "above", "below" are general stopwords but also fashion
        // terms (fill material, hem lengths); they must survive filtering.
        assert!(!STOPWORDS.contains("down"));
        assert!(!STOPWORDS.contains("above"));
        assert!(!STOPWORDS.contains("below"));
        assert!(STOPWORDS.contains("the"));
        assert!(STOPWORDS.contains("and"));
    }
}
