#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use zhengjian::core::*;
use zhengjian::generate::{GenerationOptions, generate_with};

fuzz_target!(|data: &[u8]| {
    let Some((&pick, seed)) = data.split_first() else {
        return;
    };
    let doc_type = DocumentType::ALL[usize::from(pick) % DocumentType::ALL.len()];
    let seed = seed.iter().fold(0u64, |acc, &b| acc.rotate_left(8) ^ u64::from(b));
    let mut rng = StdRng::seed_from_u64(seed);
    // Defaults are always satisfiable.
    if let Ok(n) = generate_with(&mut rng, doc_type, &GenerationOptions::new()) {
        assert!(validate_as(&n, &[doc_type]), "{doc_type:?}: {n}");
    }
});
