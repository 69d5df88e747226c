use anyhow::{bail, Context, Result};
use clap::Parser;
use qfix_bit::BitFix;
use qfix_word::WordFix;

/// Compute 1/b without a divide: x ← 2x − x²·b converges quadratically to
/// the reciprocal, and every step is adds, multiplies and relabels.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Divisor as a hex integer below 0x80 (e.g. 0e for 14)
    #[arg(long, default_value = "0e")]
    divisor: String,

    /// Working precision in fractional bits
    #[arg(long, default_value_t = 256)]
    precision: u32,

    /// Newton iterations
    #[arg(long, default_value_t = 30)]
    iters: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.precision < 64 {
        bail!("precision must be at least 64 fractional bits");
    }

    let mut b = WordFix::new(8, 0);
    b.set_from_hex(&args.divisor).context("parsing --divisor")?;
    if b.is_negative() {
        bail!("divisor must be positive");
    }

    let prec = args.precision as i32;

    // start far below the root; the doubling phase walks it up
    let mut x = WordFix::new(8, 32);
    x.set_from_hex("0000000100").context("seeding x")?;
    let mut x = x.extend_lsbs(args.precision - 32);

    for step in 0..args.iters {
        let doubled = x.reinterpret(x.int_bits() + 1, x.frac_bits() - 1)?;
        let next = &doubled - &(&(&x * &x) * &b);
        let next = next.remove_msbs((next.int_bits() - 8) as u32);
        x = next.remove_lsbs((next.frac_bits() - prec) as u32);
        println!("step {:3}: x -> {}", step, x.to_hex());
    }

    // the decimal expansion comes from the reference engine
    let mut r = BitFix::new(8, prec);
    r.set_from_hex(&x.to_hex())?;
    println!("1/0x{} -> 0.{}", args.divisor, r.to_dec());

    Ok(())
}
