use qfix_word::WordFix;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // A fixed battery of operations over seeded random values; the digest
    // must be identical on every platform and run.
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut transcript = String::new();

    for case in 0..32u64 {
        let mut a = WordFix::new(4 + (case % 7) as i32, 20 + (case % 13) as i32);
        let mut b = WordFix::new(2 + (case % 5) as i32, 24 + (case % 11) as i32);
        a.randomize(&mut rng);
        b.randomize(&mut rng);

        transcript.push_str(&(&a + &b).to_hex());
        transcript.push_str(&(&a - &b).to_hex());
        transcript.push_str(&(&a * &b).to_hex());
        transcript.push_str(&a.negated().to_hex());
        transcript.push_str(&a.extend_lsbs(9).to_hex());
        transcript.push_str(&a.extend_msbs(9).to_hex());
        transcript.push_str(&b.remove_lsbs(5).to_hex());
        transcript.push_str(&b.remove_msbs(1).to_hex());
    }

    let digest = sha256(transcript.as_bytes());
    println!("WORDFIX_HASH {}", digest);
}

fn sha256(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    let out = hasher.finalize();
    hex::encode(out)
}
