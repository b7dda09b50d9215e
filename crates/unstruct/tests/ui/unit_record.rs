use unstruct::Record;

#[derive(Record)]
struct Marker;

fn main() {}
