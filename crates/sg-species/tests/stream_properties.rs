//! Property tests for stream derivation.

use proptest::prelude::*;
use sg_core::numeric::{Tolerances, nearly_equal};
use sg_species::{ComponentVector, Species, Stream};

fn vector_strategy() -> impl Strategy<Value = ComponentVector> {
    prop::array::uniform10(0.0_f64..1.0e4).prop_map(|values| {
        ComponentVector::from_fn(|s| values[s.index()])
    })
}

proptest! {
    #[test]
    fn fractions_close_to_one(moles in vector_strategy()) {
        let stream = Stream::from_vector(moles);
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        if stream.total_moles() > 0.0 {
            let sum: f64 = stream.mole_fractions().iter().map(|(_, f)| f).sum();
            prop_assert!(nearly_equal(sum, 1.0, tol), "wet fractions sum to {}", sum);
        }
        if stream.dry_total_moles() > 0.0 {
            let dry_sum: f64 = stream.dry_fractions().iter().map(|(_, f)| f).sum();
            prop_assert!(nearly_equal(dry_sum, 1.0, tol), "dry fractions sum to {}", dry_sum);
        }
    }

    #[test]
    fn volume_is_total_times_molar_volume(moles in vector_strategy()) {
        let stream = Stream::from_vector(moles);
        prop_assert!(nearly_equal(
            stream.total_volume(),
            stream.total_moles() * 22.414,
            Tolerances::default()
        ));
    }

    #[test]
    fn derivation_is_pure(moles in vector_strategy()) {
        prop_assert_eq!(Stream::from_vector(moles), Stream::from_vector(moles));
        prop_assert_eq!(*Stream::from_vector(moles).moles(), moles);
    }
}

#[test]
fn all_zero_fractions_for_empty_stream() {
    let stream = Stream::from_vector(ComponentVector::zero());
    for species in Species::ALL {
        assert_eq!(stream.mole_fraction(species), 0.0);
        assert_eq!(stream.dry_fraction(species), 0.0);
    }
}
