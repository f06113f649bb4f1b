pub(crate) mod university;
