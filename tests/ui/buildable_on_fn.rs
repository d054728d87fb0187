#[formwork::buildable]
fn not_a_struct() {}

fn main() {}
