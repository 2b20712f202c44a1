//! Evolution-chain resolution.
//!
//! The chain is a small acyclic tree (a species never evolves into its
//! own ancestor), so a plain recursive search is all this needs.

use pokeapi_client::ChainLink;

use crate::record::title_case;

/// The immediate next evolution for a species, if any. `min_level` is
/// only ever set when `name` is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextEvolution {
    pub name: Option<String>,
    pub min_level: Option<u32>,
}

/// Find `target` in the chain and report its first next evolution.
///
/// `target` must already be lowercased; chain species names are
/// lowercase on the wire. When the matched node has multiple children
/// only the first (in chain order) is reported; branching evolutions
/// beyond that are intentionally not surfaced.
pub fn resolve(root: &ChainLink, target: &str) -> NextEvolution {
    match find_in_chain(root, target) {
        Some(node) => next_evolution(node),
        None => NextEvolution::default(),
    }
}

fn find_in_chain<'a>(node: &'a ChainLink, target: &str) -> Option<&'a ChainLink> {
    if node.species.name == target {
        return Some(node);
    }
    node.evolves_to
        .iter()
        .find_map(|child| find_in_chain(child, target))
}

fn next_evolution(node: &ChainLink) -> NextEvolution {
    let Some(next) = node.evolves_to.first() else {
        return NextEvolution::default();
    };

    // First detail entry that actually carries a level wins; entries
    // without one (trade, stone, ...) are passed over.
    let min_level = next
        .evolution_details
        .iter()
        .find_map(|detail| detail.min_level.filter(|level| *level > 0));

    NextEvolution {
        name: Some(title_case(&next.species.name)),
        min_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeapi_client::{EvolutionDetail, NamedResource};

    fn link(name: &str, details: Vec<EvolutionDetail>, children: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: NamedResource {
                name: name.to_string(),
                url: String::new(),
            },
            evolves_to: children,
            evolution_details: details,
        }
    }

    fn level(n: u32) -> EvolutionDetail {
        EvolutionDetail { min_level: Some(n) }
    }

    fn bulbasaur_chain() -> ChainLink {
        link(
            "bulbasaur",
            vec![],
            vec![link(
                "ivysaur",
                vec![level(16)],
                vec![link("venusaur", vec![level(32)], vec![])],
            )],
        )
    }

    #[test]
    fn resolves_next_evolution_with_level() {
        let next = resolve(&bulbasaur_chain(), "bulbasaur");
        assert_eq!(next.name.as_deref(), Some("Ivysaur"));
        assert_eq!(next.min_level, Some(16));
    }

    #[test]
    fn resolves_mid_chain_node() {
        let next = resolve(&bulbasaur_chain(), "ivysaur");
        assert_eq!(next.name.as_deref(), Some("Venusaur"));
        assert_eq!(next.min_level, Some(32));
    }

    #[test]
    fn terminal_node_has_no_evolution() {
        let next = resolve(&bulbasaur_chain(), "venusaur");
        assert_eq!(next, NextEvolution::default());
    }

    #[test]
    fn unknown_target_has_no_evolution() {
        let next = resolve(&bulbasaur_chain(), "pikachu");
        assert_eq!(next, NextEvolution::default());
    }

    #[test]
    fn idempotent() {
        let chain = bulbasaur_chain();
        assert_eq!(resolve(&chain, "bulbasaur"), resolve(&chain, "bulbasaur"));
    }

    // Regression guard: branching chains report the first child only.
    #[test]
    fn branching_chain_reports_first_child_only() {
        let chain = link(
            "eevee",
            vec![],
            vec![
                link("vaporeon", vec![EvolutionDetail::default()], vec![]),
                link("jolteon", vec![level(20)], vec![]),
            ],
        );
        let next = resolve(&chain, "eevee");
        assert_eq!(next.name.as_deref(), Some("Vaporeon"));
        assert_eq!(next.min_level, None);
    }

    #[test]
    fn level_taken_from_first_detail_that_has_one() {
        let chain = link(
            "slowpoke",
            vec![],
            vec![link(
                "slowbro",
                vec![EvolutionDetail::default(), level(37)],
                vec![],
            )],
        );
        let next = resolve(&chain, "slowpoke");
        assert_eq!(next.name.as_deref(), Some("Slowbro"));
        assert_eq!(next.min_level, Some(37));
    }
}
