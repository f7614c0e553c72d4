//! End-to-end checks of the public contract: construction, iteration,
//! proxy round-trips, and the bulk transform fast path.

use geom_soa::{transform, Collection, Object, Transformf, Vector3f};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Tag {
    t: i32,
}

type TaggedVec3 = Object<Vector3f, Tag>;

fn tagged(x: f32, y: f32, z: f32, t: i32) -> TaggedVec3 {
    Object::new(Vector3f::new(x, y, z), Tag { t })
}

#[test]
fn initialize() {
    let empty_col: Collection<Vector3f, Tag> = Collection::new();

    assert!(empty_col.is_empty());
    assert_eq!(empty_col.len(), 0);
    assert!(empty_col.iter().next().is_none());
    assert_eq!(empty_col.iter().len(), 0);

    let two_elements = Collection::from([tagged(0.0, 0.0, 0.0, 0), tagged(1.0, 1.0, 1.0, 0)]);

    assert!(!two_elements.is_empty());
    assert_eq!(two_elements.len(), 2);
    assert!(two_elements.iter().next().is_some());
    assert_eq!(
        two_elements.get(0).unwrap().to_object(),
        tagged(0.0, 0.0, 0.0, 0)
    );
    assert_eq!(
        two_elements.get(1).unwrap().to_object(),
        tagged(1.0, 1.0, 1.0, 0)
    );
}

// Every consumption form must observe the same logical value: by-value
// copies, shared proxies, and recombined owned objects.
#[test]
fn element_loop_forms_agree() {
    let test_val = tagged(0.0, 0.0, 0.0, 0);
    let col = Collection::from([test_val, test_val]);

    for x in &col {
        assert!(x == test_val);
    }

    for x in col.clone() {
        let value: TaggedVec3 = x;
        assert_eq!(value, test_val);
    }

    let mut count = 0;
    for x in col.iter() {
        assert_eq!(x.to_object(), test_val);
        count += 1;
    }
    assert_eq!(count, 2);

    assert_eq!(col.len(), 2);
}

#[test]
fn translation_transform() {
    let test_val = Vector3f::new(1.0, 2.0, 3.0);
    let trans = transform(Transformf::from_translation(test_val));
    let zero = Vector3f::ZERO;

    let result = trans.apply(zero);

    assert_eq!(result, test_val);
}

#[test]
fn identity_transform_via_points_leaves_everything_unchanged() {
    let objects = [tagged(0.0, 0.0, 0.0, 0), tagged(1.0, 1.0, 1.0, 0)];
    let mut col = Collection::from(objects);
    let identity = transform(Transformf::IDENTITY);

    identity.apply_points(col.points_mut());

    assert_eq!(col.len(), 2);
    for (entry, original) in col.iter().zip(objects) {
        assert_eq!(entry.to_object(), original);
    }
}

#[test]
fn proxy_assignment_round_trip() {
    let mut col = Collection::from([tagged(0.0, 0.0, 0.0, 0), tagged(1.0, 1.0, 1.0, 0)]);
    let e = tagged(2.0, 4.0, 8.0, 3);

    col.get_mut(0).unwrap().set(e);

    assert_eq!(col.get(0).unwrap().to_object(), e);
    assert_eq!(col.get(1).unwrap().to_object(), tagged(1.0, 1.0, 1.0, 0));
}

#[test]
fn swap_law_through_proxies() {
    let a = tagged(1.0, 0.0, 0.0, 1);
    let b = tagged(0.0, 1.0, 0.0, 2);
    let c = tagged(0.0, 0.0, 1.0, 3);
    let mut col = Collection::from([a, b, c]);

    let (mut i, mut j) = col.get_pair_mut(0, 2).unwrap();
    i.swap_with(&mut j);

    assert_eq!(col.get(0).unwrap().to_object(), c);
    assert_eq!(col.get(1).unwrap().to_object(), b);
    assert_eq!(col.get(2).unwrap().to_object(), a);
}

#[test]
fn bulk_transform_isolates_annotations() {
    let objects: Vec<TaggedVec3> = (0..64)
        .map(|i| tagged(i as f32, 2.0 * i as f32, -(i as f32), i))
        .collect();
    let mut col: Collection<Vector3f, Tag> = objects.iter().copied().collect();
    let trans = transform(
        Transformf::from_rotation_z(0.9) * Transformf::from_translation(Vector3f::ONE),
    );

    let annotations_before: Vec<Tag> = col.iter().map(|e| *e.meta()).collect();
    trans.apply_points(col.points_mut());

    for (i, entry) in col.iter().enumerate() {
        assert_eq!(*entry.point(), trans.apply(objects[i].point));
        assert_eq!(*entry.meta(), annotations_before[i]);
    }
}

#[test]
fn default_filled_collection_written_through_proxies() {
    let mut col: Collection<Vector3f, Tag> = Collection::with_len(4);
    assert_eq!(col.len(), 4);

    for (i, mut entry) in col.iter_mut().enumerate() {
        entry.set(tagged(i as f32, 0.0, 0.0, i as i32));
    }

    for (i, entry) in col.iter().enumerate() {
        assert_eq!(entry.to_object(), tagged(i as f32, 0.0, 0.0, i as i32));
    }
}

#[test]
fn empty_initializer_sequence() {
    let col: Collection<Vector3f, Tag> = Vec::new().into();
    assert_eq!(col.len(), 0);
}
