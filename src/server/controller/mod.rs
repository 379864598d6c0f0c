pub mod player;

#[cfg(test)]
mod test;
