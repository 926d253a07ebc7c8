// Id generation for custom countdown events
// Ids are unique across the lifetime of the store: a millisecond timestamp
// keeps them time-ordered, a random suffix makes same-millisecond creation
// collision-resistant, and the prefix namespaces them away from catalog ids.

use chrono::Local;
use rand::distributions::Alphanumeric;
use rand::Rng;

const ID_PREFIX: &str = "custom";
const SUFFIX_LEN: usize = 9;

pub(crate) fn generate_id() -> String {
    let millis = Local::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("{}-{}-{}", ID_PREFIX, millis, suffix)
}
