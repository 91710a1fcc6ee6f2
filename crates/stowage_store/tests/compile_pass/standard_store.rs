use stowage_store::store_accessors;

/// Accessors without a `store` argument use the standard store.
#[store_accessors]
pub struct Counters {
    #[store_access(default_value = 0)]
    pub compile_pass_launches: i64,

    #[store_access(default_value = true)]
    pub compile_pass_first_run: bool,
}

fn main() {
    let counters = Counters {};
    assert_eq!(counters.compile_pass_launches(), 0);
    counters.set_compile_pass_launches(2);
    assert_eq!(counters.compile_pass_launches(), 2);
    assert!(counters.compile_pass_first_run());
}
