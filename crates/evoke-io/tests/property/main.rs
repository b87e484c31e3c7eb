mod format_properties;
