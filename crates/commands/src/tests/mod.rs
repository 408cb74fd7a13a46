//! Dispatch over commands registered in this module tree.
