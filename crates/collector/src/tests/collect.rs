use pretty_assertions::assert_eq;

use super::helper::WEIRD_COMMANDS;
use super::legacy::LEGACY_COMMANDS;
use super::mistyped::NUMBERS;
use super::plugins::{
	BUILD_STEPS, COLLIDING_COMMANDS, Command, EMPTY_COMMANDS, MAIN_COMMANDS, NON_COLLIDING_COMMANDS, OTHER_COMMANDS,
	TRANSFORM_COMMANDS,
};
use crate::{
	Accumulate, CollectError, Collector, Discover, FailFast, InventoryDiscovery, PickOne, Registry, collector_id, unique,
};

const PLUGINS: &str = "gather_collector::tests::plugins";

fn names<T>(registry: &Registry<T>) -> Vec<&str> {
	let mut names: Vec<&str> = registry.keys().map(String::as_str).collect();
	names.sort_unstable();
	names
}

fn call_all(commands: &[Command]) -> Vec<String> {
	let mut results: Vec<String> = commands.iter().map(|command| command("")).collect();
	results.sort();
	results
}

#[test]
fn collects_only_own_registrations() {
	let collected = MAIN_COMMANDS.collect().expect("collect main");
	assert_eq!(names(&collected), vec!["bar", "main1", "nested", "weird_name"]);
	assert_eq!((collected["main1"])("x"), "main1 x");
}

#[test]
fn same_name_in_different_collectors_does_not_collide() {
	let main = MAIN_COMMANDS.collect().expect("collect main");
	let other = OTHER_COMMANDS.collect().expect("collect other");
	assert_eq!((main["weird_name"])("a"), "main2 a");
	assert_eq!((main["bar"])("a"), "main3 a");
	assert_eq!((other["weird_name"])("a"), "main3 a");
	assert_eq!(names(&other), vec!["baz", "weird_name"]);
}

#[test]
fn item_named_build_is_registered() {
	let collected = BUILD_STEPS.collect().expect("collect build steps");
	assert_eq!(names(&collected), vec!["build"]);
	assert_eq!((collected["build"])(), 7);
}

#[test]
fn registration_through_helper_macro_belongs_to_caller_module() {
	let collected = WEIRD_COMMANDS.collect().expect("collect weird");
	assert_eq!(names(&collected), vec!["weird_function"]);
	assert_eq!(WEIRD_COMMANDS.depth(), 2);
	assert_eq!(WEIRD_COMMANDS.name(), Some("weird"));
}

#[test]
fn transform_is_applied_on_collection() {
	let mut collected = TRANSFORM_COMMANDS.collect().expect("collect transformed");
	let fooish = collected.remove("fooish").expect("fooish registered");
	assert_eq!(fooish.extra, 5);
	assert_eq!((fooish.original)(""), "fooish");
	assert!(collected.is_empty());
}

#[test]
fn accumulate_keeps_every_registration() {
	let mut collected = COLLIDING_COMMANDS.collect_with(Accumulate).expect("accumulate never collides");
	let weird_name = collected.remove("weird_name").expect("weird_name registered");
	assert!(collected.is_empty());
	assert_eq!(call_all(&weird_name), vec!["weird_name1", "weird_name2", "weird_name3"]);
}

#[test]
fn accumulate_wraps_single_registrations() {
	let collected = MAIN_COMMANDS.collect_with(Accumulate).expect("collect main");
	assert!(collected.values().all(|values| values.len() == 1));
	let unwrapped = unique(collected).expect("single owners");
	assert_eq!((unwrapped["nested"])("y"), "nested y");
}

#[test]
fn unique_rejects_accumulated_collisions() {
	let collected = COLLIDING_COMMANDS.collect_with(Accumulate).expect("accumulate never collides");
	let err = unique(collected).expect_err("three owners");
	assert_eq!(err.name, "weird_name");
	assert_eq!(err.count, 3);
}

#[test]
fn pick_one_returns_one_of_the_candidates() {
	let collected = COLLIDING_COMMANDS.collect_with(PickOne).expect("pick one never collides");
	let winner = (collected["weird_name"])("");
	assert!(["weird_name1", "weird_name2", "weird_name3"].contains(&winner.as_str()));
}

#[test]
fn fail_fast_raises_after_scan() {
	let err = COLLIDING_COMMANDS.collect_with(FailFast).expect_err("weird_name is registered three times");
	let collision = err.collision().expect("collision error");
	assert_eq!(collision.name, "weird_name");
	assert_eq!(names(&collision.registry), vec!["weird_name"]);
	assert_ne!((collision.candidate)(""), (collision.registry["weird_name"])(""));
}

#[test]
fn fail_fast_allows_distinct_names() {
	let collected = NON_COLLIDING_COMMANDS.collect_with(FailFast).expect("no collision");
	assert_eq!(names(&collected), vec!["weird_name"]);
	MAIN_COMMANDS.collect_with(FailFast).expect("main names are distinct");
}

#[test]
fn collecting_twice_rebuilds_an_equivalent_registry() {
	let first = MAIN_COMMANDS.collect().expect("first pass");
	let second = MAIN_COMMANDS.collect().expect("second pass");
	assert_eq!(names(&first), names(&second));
}

#[test]
fn collector_without_registrations_is_empty() {
	assert!(EMPTY_COMMANDS.collect().expect("collect empty").is_empty());
}

#[test]
fn namespace_without_entry_points_is_empty() {
	static ELSEWHERE: Collector<Command> = Collector::new(collector_id!(ELSEWHERE)).in_namespace("nowhere");
	assert!(ELSEWHERE.collect().expect("collect elsewhere").is_empty());
	assert!(InventoryDiscovery.modules("nowhere").is_empty());
}

#[test]
fn absent_module_does_not_abort_siblings() {
	let discovery = |_: &str| vec!["gather_collector::tests::not_there".to_owned(), PLUGINS.to_owned()];
	let collected = MAIN_COMMANDS.collect_from(&discovery, PickOne).expect("absent module is skipped");
	assert_eq!(names(&collected), vec!["bar", "main1", "nested", "weird_name"]);
}

#[test]
fn guarded_module_opting_out_contributes_nothing() {
	let discovery = |_: &str| vec![format!("{PLUGINS}::absent")];
	let collected = MAIN_COMMANDS.collect_from(&discovery, PickOne).expect("opted-out module is skipped");
	assert!(collected.is_empty());
}

#[test]
fn submodule_of_opted_out_module_contributes_nothing() {
	let discovery = |_: &str| vec![format!("{PLUGINS}::absent::inner")];
	let collected = MAIN_COMMANDS.collect_from(&discovery, PickOne).expect("opted-out parent is skipped");
	assert!(collected.is_empty(), "loaded {:?}", names(&collected));
}

#[test]
fn submodule_of_failing_module_aborts_collection() {
	let discovery = |_: &str| vec!["gather_collector::tests::broken::inner".to_owned()];
	let err = MAIN_COMMANDS.collect_from(&discovery, PickOne).expect_err("failing parent fails the import");
	match err {
		CollectError::Import(failure) => assert_eq!(failure.module, "gather_collector::tests::broken"),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn failing_module_aborts_collection() {
	let discovery = |_: &str| vec![PLUGINS.to_owned(), "gather_collector::tests::broken".to_owned()];
	let err = MAIN_COMMANDS.collect_from(&discovery, PickOne).expect_err("broken module fails");
	match err {
		CollectError::Import(failure) => {
			assert_eq!(failure.module, "gather_collector::tests::broken");
			assert_eq!(failure.reason, "broken on purpose");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn overlapping_modules_are_applied_once() {
	let discovery = |_: &str| vec![PLUGINS.to_owned(), format!("{PLUGINS}::nested")];
	MAIN_COMMANDS.collect_from(&discovery, FailFast).expect("nested is only seen once");
}

#[test]
fn attribute_qualified_entry_point_is_discovered() {
	let collected = LEGACY_COMMANDS.collect().expect("collect legacy");
	assert_eq!((collected["old_style"])(), "old");
}

#[test]
fn mistyped_registration_is_reported() {
	let discovery = |_: &str| vec!["gather_collector::tests::mistyped".to_owned()];
	let err = NUMBERS.collect_from(&discovery, PickOne).expect_err("value is a &str");
	assert!(matches!(
		err,
		CollectError::TypeMismatch {
			name: "text",
			expected: "u32",
			..
		}
	));
}

#[test]
fn inventory_discovery_lists_declared_modules() {
	let mut modules = InventoryDiscovery.modules(crate::DEFAULT_NAMESPACE);
	modules.sort();
	assert_eq!(modules, vec!["gather_collector::tests::legacy", PLUGINS]);
}
