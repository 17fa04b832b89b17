//! End-to-end chains through the typed builder: set order must not matter,
//! defaults must fill unset optional slots, and branched chains must stay
//! independent.

use fx_slot_builder::Buildable;

mod snapshot {
    use fx_slot_builder::slots;

    /// Three required slots, no defaults.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Snapshot {
        pub count: i32,
        pub title: String,
        pub marker: char,
    }

    slots! {
        impl Snapshot {
            Count(count: i32),
            Title(title: String),
            Marker(marker: char),
        }
    }
}

mod preset {
    use fx_slot_builder::slots;

    /// Three optional slots, all with defaults.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Preset {
        pub count: i32,
        pub title: String,
        pub marker: char,
    }

    slots! {
        impl Preset {
            Count(count: i32 = 5),
            Title(title: String = String::from("5")),
            Marker(marker: char = '5'),
        }
    }
}

mod payload {
    use fx_slot_builder::slots;

    /// Sum-typed slot values, for branch divergence.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Payload {
        pub primary: Result<i32, String>,
        pub secondary: Option<Result<i32, String>>,
    }

    slots! {
        impl Payload {
            Primary(primary: Result<i32, String>),
            Secondary(secondary: Option<Result<i32, String>> = None),
        }
    }
}

use payload::{Payload, Primary, Secondary};
use preset::{Preset, Marker as PresetMarker};
use snapshot::{Count, Marker, Snapshot, Title};

#[test]
fn builds_identically_for_every_set_order() {
    let expected = Snapshot {
        count: 42,
        title: String::from("Peanuts"),
        marker: 'E',
    };

    let title = || String::from("Peanuts");

    // All six permutations of three required slots.
    let permutations = [
        Snapshot::builder()
            .set(Count, 42)
            .set(Title, title())
            .set(Marker, 'E')
            .build(),
        Snapshot::builder()
            .set(Count, 42)
            .set(Marker, 'E')
            .set(Title, title())
            .build(),
        Snapshot::builder()
            .set(Title, title())
            .set(Count, 42)
            .set(Marker, 'E')
            .build(),
        Snapshot::builder()
            .set(Title, title())
            .set(Marker, 'E')
            .set(Count, 42)
            .build(),
        Snapshot::builder()
            .set(Marker, 'E')
            .set(Count, 42)
            .set(Title, title())
            .build(),
        Snapshot::builder()
            .set(Marker, 'E')
            .set(Title, title())
            .set(Count, 42)
            .build(),
    ];

    for built in permutations {
        assert_eq!(built, expected);
    }
}

#[test]
fn unset_optional_slots_render_their_defaults() {
    let preset = Preset::builder().set(PresetMarker, '#').build();

    assert_eq!(
        preset,
        Preset {
            count: 5,
            title: String::from("5"),
            marker: '#',
        }
    );
}

#[test]
fn all_optional_record_builds_with_no_arguments() {
    let preset = Preset::builder().build();

    assert_eq!(
        preset,
        Preset {
            count: 5,
            title: String::from("5"),
            marker: '5',
        }
    );
}

#[test]
fn branched_chains_stay_independent() {
    // One shared prefix, two diverging suffixes.
    let base = Payload::builder().set(Primary, Ok(42));

    let left = base.clone().set(Secondary, Some(Ok(1000))).build();
    let right = base
        .clone()
        .set(Secondary, Some(Err(String::from("World"))))
        .build();
    let untouched = base.build();

    assert_eq!(
        left,
        Payload {
            primary: Ok(42),
            secondary: Some(Ok(1000)),
        }
    );
    assert_eq!(
        right,
        Payload {
            primary: Ok(42),
            secondary: Some(Err(String::from("World"))),
        }
    );
    assert_eq!(
        untouched,
        Payload {
            primary: Ok(42),
            secondary: None,
        }
    );
}

#[test]
fn peek_reads_a_set_slot_without_consuming_the_chain() {
    let builder = Snapshot::builder().set(Count, 42).set(Title, String::from("Peanuts"));

    assert_eq!(*builder.peek(Count), 42);
    assert_eq!(builder.peek(Title), "Peanuts");

    // The chain is still usable afterwards.
    let snapshot = builder.set(Marker, 'E').build();
    assert_eq!(snapshot.marker, 'E');
}

#[test]
fn record_round_trips_through_its_field_list() {
    use fx_slot_builder::Record;

    let snapshot = Snapshot {
        count: 42,
        title: String::from("Peanuts"),
        marker: 'E',
    };

    let round_tripped = Snapshot::from_fields(snapshot.clone().into_fields());

    assert_eq!(round_tripped, snapshot);
}
