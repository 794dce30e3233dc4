#![no_main]
use libfuzzer_sys::fuzz_target;
use strie::Dictionary;

fuzz_target!(|data: (Vec<String>, Vec<String>)| {
    let (raw_keys, raw_values) = data;

    let pairs: Vec<(&String, &String)> = raw_keys
        .iter()
        .zip(raw_values.iter())
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .collect();
    if pairs.is_empty() {
        return;
    }

    let keys: Vec<&String> = pairs.iter().map(|(k, _)| *k).collect();
    let values: Vec<&String> = pairs.iter().map(|(_, v)| *v).collect();

    let dict = Dictionary::new(&keys, &values).expect("valid input must build");

    // Every inserted pair must be retrievable.
    for (key, value) in &pairs {
        let got = dict.lookup(key).expect("stored key must resolve");
        assert!(
            got.iter().any(|v| v == *value),
            "lookup({key:?}) lost value {value:?}"
        );
    }

    // Every enumerated key must round-trip to a non-empty list.
    let mut count = 0;
    for key in dict.keys() {
        assert!(!dict.lookup(&key).expect("enumerated key must resolve").is_empty());
        count += 1;
    }
    assert_eq!(count, dict.len());
});
