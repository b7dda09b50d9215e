use unstruct::Record;

#[derive(Record)]
struct Pair(i64, i64);

fn main() {}
