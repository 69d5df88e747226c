// Differential test: both engines driven through identical inputs, hex
// exports compared after every operation. The word engine is the production
// path; the bit engine is the oracle.
use qfix_bit::BitFix;
use qfix_core::FixedNum;
use qfix_word::WordFix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A random canonical word value plus its bit-engine twin, built from the
/// same hex string.
fn random_pair(rng: &mut StdRng, int_bits: i32, frac_bits: i32) -> (WordFix, BitFix) {
    let mut w = WordFix::new(int_bits, frac_bits);
    w.randomize(rng);
    let mut b = BitFix::new(int_bits, frac_bits);
    b.set_from_hex(&w.to_hex()).unwrap();
    assert_eq!(b.to_hex(), w.to_hex(), "transfer Q({},{})", int_bits, frac_bits);
    (w, b)
}

fn random_format(rng: &mut StdRng) -> (i32, i32) {
    loop {
        let i = rng.gen_range(-16i32..80);
        let f = rng.gen_range(-16i32..80);
        if i + f > 0 {
            return (i, f);
        }
    }
}

/// The whole operation set behind the one generic seam, as a transcript of
/// hex exports. Any divergence between engines shows up as a transcript
/// mismatch.
fn battery<T: FixedNum>(
    (i1, f1): (i32, i32),
    hex_a: &str,
    (i2, f2): (i32, i32),
    hex_b: &str,
) -> Vec<String> {
    let mut a = T::new(i1, f1);
    a.set_from_hex(hex_a).unwrap();
    let mut b = T::new(i2, f2);
    b.set_from_hex(hex_b).unwrap();

    let mut nudged = a.clone();
    let moved = nudged.add_power_of_two(0, true);

    vec![
        a.to_hex(),
        a.to_bin(),
        a.add(&b).to_hex(),
        a.sub(&b).to_hex(),
        b.sub(&a).to_hex(),
        a.mul(&b).to_hex(),
        a.negated().to_hex(),
        a.extend_lsbs(7).to_hex(),
        a.extend_msbs(7).to_hex(),
        a.remove_lsbs(1).to_hex(),
        a.remove_msbs(1).to_hex(),
        a.reinterpret(i1 + 1, f1 - 1).unwrap().to_hex(),
        format!("{}", a.is_negative()),
        format!("{}", a.is_canonical()),
        format!("{}", a.min_int_bits()),
        format!("{} {}", moved, nudged.to_hex()),
    ]
}

#[test]
fn test_trait_battery_matches() {
    let mut rng = StdRng::seed_from_u64(0x0DDB17);
    for case in 0..150 {
        // a width of at least 2 keeps remove_lsbs(1)/remove_msbs(1) legal
        let (i1, f1) = loop {
            let (i, f) = random_format(&mut rng);
            if i + f >= 2 && i >= 2 {
                break (i, f);
            }
        };
        let (i2, f2) = loop {
            let (i, f) = random_format(&mut rng);
            if i + f >= 2 && i >= 2 {
                break (i, f);
            }
        };
        let mut seed_a = WordFix::new(i1, f1);
        seed_a.randomize(&mut rng);
        let mut seed_b = WordFix::new(i2, f2);
        seed_b.randomize(&mut rng);

        let word = battery::<WordFix>((i1, f1), &seed_a.to_hex(), (i2, f2), &seed_b.to_hex());
        let bit = battery::<BitFix>((i1, f1), &seed_a.to_hex(), (i2, f2), &seed_b.to_hex());
        assert_eq!(word, bit, "battery case {}", case);
    }
}

#[test]
fn test_differential_arithmetic() {
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    for case in 0..300 {
        let (i1, f1) = random_format(&mut rng);
        let (i2, f2) = random_format(&mut rng);
        let (wa, ba) = random_pair(&mut rng, i1, f1);
        let (wb, bb) = random_pair(&mut rng, i2, f2);

        let sum_w = &wa + &wb;
        let sum_b = &ba + &bb;
        assert_eq!(sum_w.to_hex(), sum_b.to_hex(), "add case {}", case);
        assert!(sum_w.is_canonical(), "add canonical case {}", case);

        let diff_w = &wa - &wb;
        let diff_b = &ba - &bb;
        assert_eq!(diff_w.to_hex(), diff_b.to_hex(), "sub case {}", case);

        let prod_w = &wa * &wb;
        let prod_b = &ba * &bb;
        assert_eq!(prod_w.to_hex(), prod_b.to_hex(), "mul case {}", case);
        assert!(prod_w.is_canonical(), "mul canonical case {}", case);

        assert_eq!(
            wa.negated().to_hex(),
            ba.negated().to_hex(),
            "negate case {}",
            case
        );
        assert_eq!(wa.is_negative(), ba.is_negative(), "sign case {}", case);
        assert_eq!(wa.to_bin(), ba.to_bin(), "bin export case {}", case);
    }
}

#[test]
fn test_differential_resize() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    for case in 0..300 {
        let (i, f) = random_format(&mut rng);
        let (w, b) = random_pair(&mut rng, i, f);
        let width = i + f;

        let k = rng.gen_range(0u32..70);
        assert_eq!(
            w.extend_lsbs(k).to_hex(),
            b.extend_lsbs(k).to_hex(),
            "extend_lsbs case {}",
            case
        );
        assert_eq!(
            w.extend_msbs(k).to_hex(),
            b.extend_msbs(k).to_hex(),
            "extend_msbs case {}",
            case
        );

        // keep at least one bit when trimming
        let down = rng.gen_range(0..width) as u32;
        assert_eq!(
            w.remove_lsbs(down).to_hex(),
            b.remove_lsbs(down).to_hex(),
            "remove_lsbs case {}",
            case
        );
        assert_eq!(
            w.remove_msbs(down).to_hex(),
            b.remove_msbs(down).to_hex(),
            "remove_msbs case {}",
            case
        );

        let shift = rng.gen_range(-8i32..8);
        assert_eq!(
            w.reinterpret(i + shift, f - shift).unwrap().to_hex(),
            b.reinterpret(i + shift, f - shift).unwrap().to_hex(),
            "reinterpret case {}",
            case
        );
    }
}

#[test]
fn test_differential_power_of_two() {
    let mut rng = StdRng::seed_from_u64(0xCAFE);
    for case in 0..300 {
        let (i, f) = random_format(&mut rng);
        let (mut w, mut b) = random_pair(&mut rng, i, f);
        let power = rng.gen_range(-24i32..96);
        let negative = rng.gen_bool(0.5);

        let applied_w = w.add_power_of_two(power, negative);
        let applied_b = b.add_power_of_two(power, negative);
        assert_eq!(applied_w, applied_b, "in-range case {}", case);
        assert_eq!(w.to_hex(), b.to_hex(), "power case {}", case);
        assert!(w.is_canonical(), "power canonical case {}", case);
    }
}

#[test]
fn test_differential_min_int_bits() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    for case in 0..300 {
        let (i, f) = random_format(&mut rng);
        let (w, b) = random_pair(&mut rng, i, f);
        assert_eq!(w.min_int_bits(), b.min_int_bits(), "case {}", case);
    }
}

// Associativity and distributivity hold exactly: the Q-format rules give
// both groupings the same output precision, and no operation loses bits.
#[test]
fn test_algebraic_laws() {
    let mut rng = StdRng::seed_from_u64(0xFACADE);
    for case in 0..200 {
        let (i1, f1) = random_format(&mut rng);
        let (i2, f2) = random_format(&mut rng);
        let (i3, f3) = random_format(&mut rng);
        let (a, _) = random_pair(&mut rng, i1, f1);
        let (b, _) = random_pair(&mut rng, i2, f2);
        let (c, _) = random_pair(&mut rng, i3, f3);

        // The two groupings of + land in different Q-formats (the +1 growth
        // is not associative), so widths are unified before comparing.
        let lhs = &(&a + &b) + &c;
        let rhs = &a + &(&b + &c);
        let top = lhs.int_bits().max(rhs.int_bits());
        assert_eq!(
            lhs.extend_msbs((top - lhs.int_bits()) as u32),
            rhs.extend_msbs((top - rhs.int_bits()) as u32),
            "add assoc case {}",
            case
        );

        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c), "mul assoc case {}", case);
        assert_eq!(
            &a * &(&b + &c),
            &(&a * &b) + &(&a * &c),
            "distributivity case {}",
            case
        );
    }
}
