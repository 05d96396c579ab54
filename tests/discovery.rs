use wireup::{discover, submit_candidate, Candidate, Container, DiscoveryScope, RegistrationBuilder, Registry};

mod billing {
    use wireup::{submit_candidate, Candidate};

    pub trait Invoicing: Send + Sync {}

    #[derive(Default)]
    pub struct InvoiceService;
    impl Invoicing for InvoiceService {}

    submit_candidate!(|| Candidate::of(InvoiceService::default)
        .implements::<dyn Invoicing>(|service| service)
        .scoped()
        .build());
}

mod shipping {
    use wireup::{submit_candidate, Candidate};

    #[derive(Default)]
    pub struct DispatchService;

    submit_candidate!(|| Candidate::of(DispatchService::default).singleton().build());
}

submit_candidate!(|| Candidate::of(String::new).in_unit("manual").build());

#[test]
fn test_all_scope_sees_every_submission() {
    let candidates = discover(DiscoveryScope::All);
    assert_eq!(candidates.len(), 3);
}

#[test]
fn test_unit_tags_default_to_module_path() {
    let candidates = discover(DiscoveryScope::Unit("discovery::billing"));
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].short_name(), "InvoiceService");
}

#[test]
fn test_explicit_unit_tag_wins_over_module_path() {
    let candidates = discover(DiscoveryScope::Unit("manual"));
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].short_name(), "String");
}

#[test]
fn test_units_scope_is_a_union() {
    let candidates = discover(DiscoveryScope::Units(&["discovery::billing", "discovery::shipping"]));
    assert_eq!(candidates.len(), 2);
}

#[test]
fn test_discovery_is_idempotent() {
    let first: Vec<_> = discover(DiscoveryScope::All).iter().map(Candidate::type_info).collect();
    let second: Vec<_> = discover(DiscoveryScope::All).iter().map(Candidate::type_info).collect();
    assert_eq!(first, second);
}

#[test]
fn test_discovered_candidates_build_end_to_end() {
    let mut registry = Registry::new();
    RegistrationBuilder::discover(DiscoveryScope::Units(&["discovery::billing", "discovery::shipping"]))
        .build(&mut registry)
        .unwrap();

    let container = Container::new(registry);
    assert!(container.get::<shipping::DispatchService>().is_ok());
    assert!(container.enter_request().get_interface::<dyn billing::Invoicing>().is_ok());
}
