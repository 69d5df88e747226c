use anyhow::{bail, Result};
use clap::Parser;
use qfix_bit::BitFix;
use qfix_word::WordFix;

/// Compute √c by bisection: the comparison each step is just the sign of
/// c − mid², and the halving is a relabel plus one truncation.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Radicand, a small positive integer
    #[arg(long, default_value_t = 2)]
    value: u32,

    /// Working precision in fractional bits
    #[arg(long, default_value_t = 64)]
    precision: u32,

    /// Bisection iterations (0 = precision + 8)
    #[arg(long, default_value_t = 0)]
    iters: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.value == 0 || args.value > 126 {
        bail!("--value must be in 1..=126");
    }
    if args.precision < 8 {
        bail!("precision must be at least 8 fractional bits");
    }
    let prec = args.precision as i32;
    let iters = if args.iters == 0 {
        args.precision + 8
    } else {
        args.iters
    };

    let mut c = WordFix::new(8, 0);
    c.set_from_hex(&format!("{:02x}", args.value))?;
    let c = c.extend_lsbs(args.precision);

    // invariant: lo² ≤ c < hi²
    let mut lo = WordFix::new(8, prec);
    let mut hi = WordFix::new(8, prec);
    let mut seed = WordFix::new(8, 0);
    seed.set_from_hex(&format!("{:02x}", args.value + 1))?;
    hi.copy_from(&seed.extend_lsbs(args.precision))?;

    for _ in 0..iters {
        let sum = &lo + &hi;
        let mid = sum.reinterpret(8, prec + 1)?.remove_lsbs(1);
        let r = &c - &(&mid * &mid);
        if r.is_negative() {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    println!("sqrt({}) -> {}", args.value, lo.to_hex());

    // split off the integer part so the reference engine can print the
    // fractional digits
    let whole = lo.remove_lsbs(args.precision);
    let frac = &lo - &whole.extend_lsbs(args.precision);
    let mut r = BitFix::new(frac.int_bits(), frac.frac_bits());
    r.set_from_hex(&frac.to_hex())?;
    println!("sqrt({}) -> {}.{}", args.value, whole.limb(0), r.to_dec());

    Ok(())
}
