mod design_properties;
