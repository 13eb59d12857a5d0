use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DeckcastError::input("x")
            .to_string()
            .contains("input error:")
    );
    assert!(
        DeckcastError::collaborator("x")
            .to_string()
            .contains("collaborator error:")
    );
    assert!(
        DeckcastError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        DeckcastError::scheduling("x")
            .to_string()
            .contains("scheduling error:")
    );
    assert!(
        DeckcastError::assembly("x")
            .to_string()
            .contains("assembly error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DeckcastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn trace_includes_cause_chain() {
    let base = std::io::Error::other("disk on fire");
    let err = DeckcastError::Other(anyhow::Error::new(base).context("writing frame"));
    let trace = err.trace();
    assert!(trace.contains("writing frame"));
    assert!(trace.contains("disk on fire"));
}
