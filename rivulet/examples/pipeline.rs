use rivulet::operators::*;
use rivulet::Stream;

fn main() -> Result<(), rivulet::Error> {
    Stream::of([3, 0, 1, 6, 4, 0, 8, 9, 7])
        .filter(|n| *n != 0)
        .sorted()
        .limit(3)
        .map(|n| n * 10)
        .for_each(|n| println!("seen: {:?}", n))
}
