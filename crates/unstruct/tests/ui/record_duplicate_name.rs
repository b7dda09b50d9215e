use unstruct::Record;

#[derive(Record)]
struct Point {
    x: i64,
    #[record(rename = "x")]
    y: i64,
}

fn main() {}
