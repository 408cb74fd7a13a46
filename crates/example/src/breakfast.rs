//! Breakfast foods, collected as plugins of their own.

use gather_collector::{Accumulate, collector, register, unique};
use gather_commands::{CommandContext, command};
use tracing::info;

use crate::ENTRY;

/// Something that can be served at breakfast.
pub trait Food: core::fmt::Debug + Send + Sync {
	fn prepare(&self);
	fn eat(&self);
}

collector!(
	/// Foods served by the `breakfast` command.
	pub static BREAKFAST: Collector<Box<dyn Food>>
);

fn serve(food: impl Food + 'static) -> Box<dyn Food> {
	Box::new(food)
}

/// Collects the foods, prepares all of them, then eats them.
fn breakfast(_ctx: &CommandContext<'_>) -> anyhow::Result<()> {
	let foods = unique(BREAKFAST.collect_with(Accumulate)?)?;
	let mut foods: Vec<(String, Box<dyn Food>)> = foods.into_iter().collect();
	foods.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

	for (_, food) in &foods {
		food.prepare();
	}
	for (_, food) in &foods {
		food.eat();
	}
	Ok(())
}

command!(ENTRY, breakfast);

#[derive(Debug)]
pub struct Eggs;

impl Food for Eggs {
	fn prepare(&self) {
		info!("Scrambling eggs");
	}

	fn eat(&self) {
		info!("Devouring eggs");
	}
}

register!(BREAKFAST, Eggs, transform = serve);

#[derive(Debug)]
pub struct Cereal;

impl Food for Cereal {
	fn prepare(&self) {
		info!("Mixing cereal and milk");
	}

	fn eat(&self) {
		info!("Eating cereal with a spoon");
	}
}

register!(BREAKFAST, Cereal, transform = serve);

#[derive(Debug)]
pub struct OrangeJuice;

impl Food for OrangeJuice {
	fn prepare(&self) {
		info!("Squeezing orange juice");
	}

	fn eat(&self) {
		info!("Drinking orange juice");
	}
}

register!(BREAKFAST, OrangeJuice, transform = serve);
