//! Binds the `address_field` feature files to the step registry.

use crate::fixtures::{AddressContext, context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/defaults.feature",
    fixtures = [context: AddressContext]
);
scenarios!(
    "tests/features/value_loading.feature",
    fixtures = [context: AddressContext]
);
scenarios!(
    "tests/features/api_format.feature",
    fixtures = [context: AddressContext]
);
scenarios!(
    "tests/features/edit_form.feature",
    fixtures = [context: AddressContext]
);
scenarios!(
    "tests/features/options_panel.feature",
    fixtures = [context: AddressContext]
);
