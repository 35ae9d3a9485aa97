use chrono::Local;
use fake::{Fake, Faker};
use rand::Rng;
use rand_xorshift::XorShiftRng;

/// Sample words for text content.
const WORDS: [&str; 10] = [
    "colour",
    "flavour",
    "behaviour",
    "humour",
    "labour",
    "neighbour",
    "rumour",
    "splendour",
    "vigour",
    "valour",
];

/// Returns a literal value for a simple-type name.
///
/// The name must already be stripped of its namespace prefix. XSD
/// built-in tokens are matched case-insensitively; anything
/// unrecognized is treated like `string`.
pub(crate) fn synthesize(type_name: &str, rng: &mut XorShiftRng) -> String {
    match type_name.to_ascii_lowercase().as_str() {
        "string" => sample_word(rng).to_string(),
        "int" | "integer" => (0..100).fake_with_rng::<i32, _>(rng).to_string(),
        "decimal" | "float" | "double" => {
            format!("{:.2}", (0.0..100.0).fake_with_rng::<f64, _>(rng))
        }
        "boolean" => Faker.fake_with_rng::<bool, _>(rng).to_string(),
        "date" => Local::now().format("%Y-%m-%d").to_string(),
        "time" => Local::now().format("%H:%M:%S").to_string(),
        "datetime" => Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        _ => sample_word(rng).to_string(),
    }
}

fn sample_word(rng: &mut XorShiftRng) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}
