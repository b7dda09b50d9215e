use unstruct::Record;

#[derive(Record)]
union Either {
    a: i64,
    b: f64,
}

fn main() {}
