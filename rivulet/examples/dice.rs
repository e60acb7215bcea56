use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rivulet::operators::*;
use rivulet::Stream;

fn main() -> Result<(), rivulet::Error> {
    let mut rng = SmallRng::seed_from_u64(0xD1CE);
    let rolls = Stream::generate(move || rng.gen_range(1..=6i64))
        .limit(1_000)
        .collect(to_list())?;

    let sixes = Stream::of(rolls.clone()).filter(|roll| *roll == 6).count()?;
    let average = Stream::of(rolls).average()?.expect("a thousand rolls");

    println!("sixes: {}", sixes);
    println!("average roll: {}", average);
    Ok(())
}
