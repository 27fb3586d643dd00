pub mod auto_return;
