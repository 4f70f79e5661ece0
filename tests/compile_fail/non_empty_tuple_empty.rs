//! Test that combining zero computations into a tuple is rejected.

fn main() {
    let _ = typekind::non_empty_tuple!(typekind::data::OptionTypeLambda;);
}
