#[cfg(test)]
mod common;

#[cfg(test)]
mod converter_tests;

#[cfg(test)]
mod noc_workflow_tests;


#[cfg(test)]
mod document_tests;


#[cfg(test)]
mod logging_tests;
