use gather_example::ENTRY;

fn main() {
	ENTRY.main()
}
