//! `gather-example breakfast`, installed as its own binary.

use gather_example::ENTRY;

fn main() {
	ENTRY.sub_command()
}
