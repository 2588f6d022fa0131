//! Event graph integration tests.
//!
//! Events are recorded parent first, stored child first, and layered incrementally so that
//! new events merge into the existing layout.

use graff::prelude::*;

/// Simple event identifier, as a log or DAG-based ledger would use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct EventId(u32);

fn record(events: &mut EventGraph<EventId>, parent: u32, child: u32) {
    events.add_edge(EventId(parent), EventId(child));
}

#[test]
fn test_event_log_layering() -> Result<()> {
    let mut events = EventGraph::new();
    record(&mut events, 0, 1);
    record(&mut events, 0, 2);
    record(&mut events, 1, 3);
    record(&mut events, 2, 3);

    let mut sorter = EventGraph::sorter(2)?;
    sorter.sort(&events)?;

    // Newest event first, genesis last.
    assert_eq!(sorter.level_of(&EventId(3)), Some(0));
    assert_eq!(sorter.level_of(&EventId(1)), Some(1));
    assert_eq!(sorter.level_of(&EventId(2)), Some(1));
    assert_eq!(sorter.level_of(&EventId(0)), Some(2));
    Ok(())
}

#[test]
fn test_new_events_do_not_move_old_ones() -> Result<()> {
    let mut events = EventGraph::new();
    record(&mut events, 0, 1);
    record(&mut events, 1, 2);

    let mut sorter = EventGraph::sorter(3)?;
    sorter.sort(&events)?;
    let before = sorter.levels().clone();

    for child in 3..10 {
        record(&mut events, child - 1, child);
        sorter.sort(&events)?;

        for (event, level) in &before {
            assert_eq!(sorter.level_of(event), Some(*level));
        }
        assert!(sorter.layers().iter().all(|layer| layer.len() <= 3));
    }

    assert_eq!(sorter.levels().len(), events.node_count());
    Ok(())
}

#[test]
fn test_sorting_through_the_directed_view() -> Result<()> {
    let mut events = EventGraph::new();
    record(&mut events, 0, 1);
    record(&mut events, 1, 2);
    record(&mut events, 0, 2);

    let order = events.dfs_sort()?;
    assert_eq!(order, vec![EventId(2), EventId(1), EventId(0)]);

    let graph: &DirectedGraph<EventId> = events.as_directed();
    assert_eq!(graph.coffman_graham_sort(1)?.len(), 3);

    events.remove_transitives()?;
    assert!(!events.edge_exists(&EventId(0), &EventId(2)));
    Ok(())
}

#[test]
fn test_contradicting_history_is_cyclic() {
    let mut events = EventGraph::new();
    record(&mut events, 0, 1);
    record(&mut events, 1, 2);
    record(&mut events, 2, 0);

    assert_eq!(events.dfs_sort(), Err(Error::CyclicGraph));
    assert!(events.as_directed().has_cycle());

    let mut sorter = EventGraph::sorter(2).unwrap();
    assert_eq!(sorter.sort(&events).unwrap_err(), Error::CyclicGraph);
}
