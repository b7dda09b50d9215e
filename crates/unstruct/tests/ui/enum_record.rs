use unstruct::Record;

#[derive(Record)]
enum Direction {
    North,
    South,
}

fn main() {}
