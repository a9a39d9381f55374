mod test_feedback;
mod test_level;
