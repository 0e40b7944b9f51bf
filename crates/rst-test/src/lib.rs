#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod test_beam;

#[cfg(test)]
mod test_oracle;

#[cfg(test)]
mod test_seed_scenarios;
