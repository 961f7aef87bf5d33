use container_display::{
    decorated, printed, sequence, shaped, to_string, to_utf16, ContainerFmt, Decorator,
    ElementFmt, Shape,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;

fn assert_container<T: ContainerFmt + ?Sized>() {}

fn wide_string<T: ContainerFmt>(value: &T) -> String {
    String::from_utf16(&to_utf16(value)).unwrap()
}

#[test]
fn classification_accepts_iterable_containers() {
    assert_container::<Vec<i32>>();
    assert_container::<VecDeque<i32>>();
    assert_container::<LinkedList<i32>>();
    assert_container::<BTreeSet<i32>>();
    assert_container::<HashSet<i32>>();
    assert_container::<[i32; 10]>();
    assert_container::<[i32]>();
    assert_container::<(i32, String)>();
    assert_container::<(i32, f64, String)>();
    assert_container::<IndexSet<i32>>();
    assert_container::<IndexMap<i32, String>>();
    // Containers of characters are still containers; only strings and
    // character arrays are excluded.
    assert_container::<Vec<char>>();
    // References to containers classify with the same shape.
    assert_container::<&Vec<i32>>();
}

#[test]
fn fixed_arrays_print_as_sequences() {
    let array = [1, 2, 3, 4, 5];
    assert_eq!(to_string(&array), "[1, 2, 3, 4, 5]");
    assert_eq!(wide_string(&array), "[1, 2, 3, 4, 5]");
}

#[test]
fn pairs_print_with_parentheses() {
    let pair = (10, 100);
    assert_eq!(to_string(&pair), "(10, 100)");
    assert_eq!(wide_string(&pair), "(10, 100)");
}

#[test]
fn empty_containers_keep_their_brackets() {
    assert_eq!(to_string(&Vec::<i32>::new()), "[]");
    assert_eq!(to_string(&BTreeSet::<i32>::new()), "{}");
    assert_eq!(to_string(&()), "<>");
    assert_eq!(wide_string(&Vec::<i32>::new()), "[]");
    assert_eq!(wide_string(&BTreeSet::<i32>::new()), "{}");
    assert_eq!(wide_string(&()), "<>");
}

#[test]
fn populated_vector() {
    let vector = vec![1, 2, 3, 4];
    assert_eq!(to_string(&vector), "[1, 2, 3, 4]");
    assert_eq!(wide_string(&vector), "[1, 2, 3, 4]");
}

#[test]
fn ordered_sets_print_with_braces() {
    let set: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
    assert_eq!(to_string(&set), "{1, 2, 3, 4}");
    assert_eq!(wide_string(&set), "{1, 2, 3, 4}");
}

#[test]
fn insertion_ordered_sets_print_with_braces() {
    let set: IndexSet<i32> = [4, 1, 3].into_iter().collect();
    assert_eq!(to_string(&set), "{4, 1, 3}");
}

#[test]
fn unordered_sets_fall_back_to_brackets() {
    let mut set = HashSet::new();
    set.insert(7);
    assert_eq!(to_string(&set), "[7]");
}

#[test]
fn tuples_print_with_angle_brackets() {
    let tuple = (1, 2, 3, 4, 5);
    assert_eq!(to_string(&tuple), "<1, 2, 3, 4, 5>");
    assert_eq!(wide_string(&tuple), "<1, 2, 3, 4, 5>");
}

#[test]
fn single_element_tuple() {
    assert_eq!(to_string(&(9,)), "<9>");
}

#[test]
fn maps_print_as_sequences_of_pairs() {
    let map = BTreeMap::from([(1, "Template"), (2, "Meta"), (3, "Programming")]);
    assert_eq!(
        to_string(&map),
        "[(1, Template), (2, Meta), (3, Programming)]"
    );
    assert_eq!(
        wide_string(&map),
        "[(1, Template), (2, Meta), (3, Programming)]"
    );
}

#[test]
fn index_maps_preserve_insertion_order() {
    let mut map = IndexMap::new();
    map.insert("b", 2);
    map.insert("a", 1);
    assert_eq!(to_string(&map), "[(b, 2), (a, 1)]");
}

#[test]
fn vectors_of_tuples_nest() {
    let vector = vec![
        (1, 0.1, String::from("Hello")),
        (2, 0.2, String::from("World")),
    ];
    assert_eq!(to_string(&vector), "[<1, 0.1, Hello>, <2, 0.2, World>]");
    assert_eq!(wide_string(&vector), "[<1, 0.1, Hello>, <2, 0.2, World>]");
}

#[test]
fn pairs_of_vectors_of_pairs_nest() {
    let pair = (10, vec![("Why", "Not?"), ("Someone", "Might!")]);
    assert_eq!(to_string(&pair), "(10, [(Why, Not?), (Someone, Might!)])");
}

#[test]
fn deep_nesting() {
    let deep = vec![vec![vec![1], vec![]], vec![]];
    assert_eq!(to_string(&deep), "[[[1], []], []]");
}

#[test]
fn string_elements_print_as_plain_strings() {
    let names = vec!["Alice", "Bob"];
    assert_eq!(to_string(&names), "[Alice, Bob]");

    let owned = vec![String::from("one"), String::from("two")];
    assert_eq!(to_string(&owned), "[one, two]");
}

#[test]
fn printing_is_idempotent() {
    let value = vec![(1, "a"), (2, "b")];
    assert_eq!(to_string(&value), to_string(&value));
    assert_eq!(to_utf16(&value), to_utf16(&value));
}

#[test]
fn printed_adapter_composes_with_format() {
    let value = vec![1, 2];
    assert_eq!(format!("-> {} <-", printed(&value)), "-> [1, 2] <-");
}

struct BannerDecorator;

impl Decorator for BannerDecorator {
    fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$$ ")
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" | ")
    }

    fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" $$")
    }
}

#[test]
fn custom_decorator_on_a_vector() {
    let container = vec![1, 2, 3, 4];
    assert_eq!(
        decorated(&container, BannerDecorator).to_string(),
        "$$ 1 | 2 | 3 | 4 $$"
    );
}

#[test]
fn custom_decorator_on_a_tuple() {
    let container = (1, 2, 3, 4);
    assert_eq!(
        decorated(&container, BannerDecorator).to_string(),
        "$$ 1 | 2 | 3 | 4 $$"
    );
}

#[test]
fn custom_decorator_on_a_pair() {
    let container = (1, 2);
    assert_eq!(
        decorated(&container, BannerDecorator).to_string(),
        "$$ 1 | 2 $$"
    );
}

struct QuotingDecorator;

impl Decorator for QuotingDecorator {
    fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(", ")
    }

    fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("]")
    }

    fn write_element<E>(&self, f: &mut fmt::Formatter<'_>, element: &E) -> fmt::Result
    where
        E: ElementFmt + ?Sized,
    {
        f.write_str("'")?;
        element.fmt_element(f)?;
        f.write_str("'")
    }
}

#[test]
fn decorators_can_transform_elements() {
    let words = vec!["a", "b"];
    assert_eq!(decorated(&words, QuotingDecorator).to_string(), "['a', 'b']");
}

struct Ranked(Vec<u32>);

impl<'a> IntoIterator for &'a Ranked {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[test]
fn wrapper_types_print_through_the_structural_adapter() {
    let ranked = Ranked(vec![3, 1, 2]);
    assert_eq!(sequence(&ranked).to_string(), "[3, 1, 2]");
    assert_eq!(shaped(&ranked, Shape::Set).to_string(), "{3, 1, 2}");
}
